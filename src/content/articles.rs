/// News articles shown on the News & Events page
///
/// The list is static: it ships with the binary and never changes while
/// the app runs. Order here is display order.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Featured,
    ClientStories,
    InTheMedia,
    OurNews,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Featured,
        Category::ClientStories,
        Category::InTheMedia,
        Category::OurNews,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Featured => "Featured",
            Category::ClientStories => "Client Stories",
            Category::InTheMedia => "In The Media",
            Category::OurNews => "Our News",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One news item
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    /// Free-form display date ("January 2025", "March 27, 2025")
    pub date: &'static str,
    pub category: Category,
    pub excerpt: &'static str,
    pub content: &'static str,
    /// Image under `news/` in the asset directory
    pub image: Option<&'static str>,
    pub slug: &'static str,
    pub featured: bool,
    /// Full story on another site
    pub external_link: Option<&'static str>,
    /// YouTube video shown instead of an image
    pub video_id: Option<&'static str>,
}

impl Article {
    pub fn video_url(&self) -> Option<String> {
        self.video_id
            .map(|id| format!("https://www.youtube.com/watch?v={id}"))
    }
}

const LAUNCH_PARTY_CONTENT: &str = "It's hard to believe that we have completed the third issue of Mend, a publication showcasing the writing and art of those impacted by the criminal legal system.

Our launch party will be a hybrid event, where we will celebrate the 2025 issue of Mend and render, a new publication exploring the lives and creative works of impacted artists produced by Katherine Nikolau, a Writing and Rhetoric major who graduated in December through a SOURCE research grant.

📅 Date: Saturday, February 15
⏰ Time: 12:00 p.m. - 1:30 p.m. ET
📍 Location: Syracuse Central Library, Community Room, 447 S. Salina St., Syracuse, NY 13202 and via Zoom

This event will include a light lunch.

Project Mend is made possible through collaboration with the Center for Community Alternatives and through an HNY Post-Incarceration Humanities Partnership, which is generously supported by the Mellon Foundation. Additionally, the project has been supported at Syracuse University by: Engaged Humanities Network, The Humanities Center, SOURCE, Syracuse University Libraries, and the Department of Writing Studies, Rhetoric, and Composition.

For accommodations or more information: Contact Patrick W. Berry at pwberry@syr.edu by February 11.";

pub static ARTICLES: [Article; 8] = [
    Article {
        id: "6",
        title: "Writing New Futures",
        date: "January 2025",
        category: Category::InTheMedia,
        excerpt: "The Coalition for Community Writing honored Project Mend with its 2025 Outstanding College-Community Partnership Award.",
        content: "The Coalition for Community Writing honored Project Mend with its 2025 Outstanding College-Community Partnership Award, recognizing the initiative's efforts to empower justice-impacted individuals through writing and publishing.",
        image: Some("writing_new_futures.jpg"),
        slug: "writing-new-futures",
        featured: true,
        external_link: Some("https://artsandsciences.syracuse.edu/writing-studies-rhetoric-and-composition/news/writing-new-futures/"),
        video_id: None,
    },
    Article {
        id: "7",
        title: "When I Think of Freedom...",
        date: "December 2024",
        category: Category::InTheMedia,
        excerpt: "Alexis Kirkpatrick reflects on a recent public reading and workshop.",
        content: "Alexis Kirkpatrick, a biology major, forensic science minor and undergraduate research assistant for Project Mend, reflects on a recent public reading and workshop highlighting the creative work of individuals impacted by the criminal legal system.",
        image: Some("when_i_think_of_freedom.jpg"),
        slug: "when-i-think-of-freedom",
        featured: true,
        external_link: Some("https://artsandsciences.syracuse.edu/writing-studies-rhetoric-and-composition/news/when-i-think-of-freedom/"),
        video_id: None,
    },
    Article {
        id: "8",
        title: "How Project Mend is helping formerly incarcerated people and their families tell their stories",
        date: "March 27, 2025",
        category: Category::InTheMedia,
        excerpt: "Central Current features Project Mend's work with formerly incarcerated individuals.",
        content: "How Project Mend is helping formerly incarcerated people and their families tell their stories. Project Mend was started by Syracuse University professor Patrick W. Berry, whose own family member's incarceration prompted him to help incarcerated people tell their stories.",
        image: Some("central_current.jpg"),
        slug: "central-current-project-mend",
        featured: true,
        external_link: Some("https://centralcurrent.org/how-project-mend-is-helping-formerly-incarcerated-people-and-their-families-tell-their-stories/"),
        video_id: None,
    },
    Article {
        id: "1",
        title: "Celebrating the 2025 Issue of Mend",
        date: "February 15, 2025",
        category: Category::Featured,
        excerpt: "It's hard to believe that we have completed the third issue of Mend, a publication showcasing the writing and art of those impacted by the criminal legal system.",
        content: LAUNCH_PARTY_CONTENT,
        image: Some("launch_party_2025.png"),
        slug: "celebrating-2025-issue-mend",
        featured: true,
        external_link: None,
        video_id: None,
    },
    Article {
        id: "2",
        title: "HNY Post-Incarceration Humanities Partnership Convening",
        date: "May 21, 2024",
        category: Category::OurNews,
        excerpt: "Humanities New York hosted an in-person convening for our Post-Incarceration Humanities Partnership (PIHP) grant cohort members.",
        content: "On May 21, 2024, Humanities New York hosted an in-person convening for our Post-Incarceration Humanities Partnership (PIHP) grant cohort members, bringing together organizations working to support returning citizens through humanities programming.",
        image: None,
        slug: "hny-pihp-convening",
        featured: true,
        external_link: None,
        video_id: Some("Iez6a6fYUZ8"),
    },
    Article {
        id: "3",
        title: "Delighted to have Alex Anderson from Reentry Theater of Harlem join us on Thursday, September 19.",
        date: "September 19, 2024",
        category: Category::OurNews,
        excerpt: "Delighted to have Alex Anderson from Reentry Theater of Harlem join us on Thursday, September 19.",
        content: "We were delighted to have Alex Anderson from Reentry Theater of Harlem join us on Thursday, September 19. Alex shared insights from his work in theater and reentry programs, inspiring our community with powerful stories of transformation and creativity.",
        image: Some("alex_anderson.png"),
        slug: "alex-anderson-visit",
        featured: true,
        external_link: None,
        video_id: None,
    },
    Article {
        id: "4",
        title: "Congratulations to Mend editor Ilhy Gomez Del Campo Rojas..",
        date: "May 2024",
        category: Category::ClientStories,
        excerpt: "Celebrating the achievements of our dedicated Mend editorial team member.",
        content: "Congratulations to Mend editor Ilhy Gomez Del Campo Rojas for their outstanding contributions to the publication. Their dedication and editorial expertise have been instrumental in bringing impactful stories to our community.",
        image: Some("mend_team_2024.jpg"),
        slug: "congratulations-ilhy-gomez",
        featured: true,
        external_link: None,
        video_id: None,
    },
    Article {
        id: "5",
        title: "On June 8th, 2024, Project Mend had the great opportunity of participating in the community festival United We End Racism",
        date: "June 8, 2024",
        category: Category::OurNews,
        excerpt: "On June 8th, 2024, Project Mend had the great opportunity of participating in the community festival United We End Racism.",
        content: "On June 8th, 2024, Project Mend had the great opportunity of participating in the community festival United We End Racism. This community event brought together diverse voices and perspectives in the fight against systemic racism and social injustice.",
        image: Some("united_we_end_racism.jpg"),
        slug: "united-we-end-racism-festival",
        featured: true,
        external_link: None,
        video_id: None,
    },
];
