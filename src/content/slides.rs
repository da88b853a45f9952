/// Photos for the home page slideshow
use std::path::Path;

use crate::config::SiteConfig;
use crate::slideshow::Slide;

/// (file under `slideshow/`, alt text, caption)
const SLIDES: [(&str, &str, &str); 8] = [
    (
        "katherine_patrick_michael.jpg",
        "Katherine, Patrick, and Michael at Project Mend event",
        "Katherine, Patrick, and Michael at a Project Mend event",
    ),
    (
        "jackie2.jpg",
        "Jackie at Project Mend gathering",
        "Jackie during a Project Mend gathering",
    ),
    (
        "michael_james_troy.jpg",
        "Michael, James, and Troy engaging with community",
        "Michael, James, and Troy engaging with the community",
    ),
    (
        "theo_yusra.jpg",
        "Theo and Yusra at Project Mend",
        "Theo and Yusra participating in Project Mend",
    ),
    (
        "everson.jpg",
        "Project Mend at the Everson Museum",
        "Project Mend event at the Everson Museum",
    ),
    (
        "daquan_5.jpg",
        "Daquan at a Project Mend workshop",
        "Daquan at a Project Mend workshop",
    ),
    (
        "group.jpg",
        "Project Mend group photo",
        "Group photo from a Project Mend event",
    ),
    (
        "marion_troy_tony_in_studio.jpg",
        "Marion, Troy, and Tony in the studio",
        "Marion, Troy, and Tony recording in the studio",
    ),
];

/// The home page slides with image paths resolved against `assets_dir`
pub fn home_slides(config: &SiteConfig) -> Vec<Slide> {
    SLIDES
        .iter()
        .map(|(file, alt, caption)| {
            let image = config.asset(&Path::new("slideshow").join(file));
            Slide::new(image, *alt, *caption)
        })
        .collect()
}
