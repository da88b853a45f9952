/// Static site content
///
/// - Slideshow photos (slides.rs)
/// - News articles and categories (articles.rs)
/// - Category filter and pagination over the articles (feed.rs)

pub mod articles;
pub mod feed;
pub mod slides;
