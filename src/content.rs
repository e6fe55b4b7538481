//! Page copy and media references.
//!
//! Everything the page says lives in [`SiteContent`]. The stock content is the
//! farm's published copy; a `content.toml` next to `config.toml` overrides any
//! part of it with the same deep-merge rules as the config (tables merge,
//! arrays replace wholesale):
//!
//! ```toml
//! [hero]
//! lead = "Fresh eggs every morning."
//!
//! [[products.items]]
//! name = "Layer Eggs"
//! description = "Collected daily."
//! image = "images/eggs.jpg"
//! features = ["Free-range"]
//! price = "₦ 4,000 / crate"
//! ```
//!
//! The about body is markdown.

use crate::config::{self, ConfigError};
use crate::section::SectionId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Could not read content: {0}")]
    Load(#[from] ConfigError),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML encode error: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
}

pub const CONTENT_FILE: &str = "content.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub about: About,
    pub products: Products,
    pub gallery: Gallery,
    pub testimonials: Testimonials,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Brand {
    pub name: String,
    pub logo: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "QalimTech Farms".into(),
            logo: "images/logo.png".into(),
        }
    }
}

/// A button that scrolls to a section through the navigation click path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub label: String,
    pub target: SectionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub highlight: String,
    pub lead: String,
    pub background: String,
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            badge: "Premium Livestock & Farming".into(),
            title: "Welcome to".into(),
            highlight: "Qalimtech Farms".into(),
            lead: "Discover the best in poultry and pig farming in Nigeria. We are dedicated \
                   to providing high-quality, healthy livestock through sustainable and \
                   ethical practices."
                .into(),
            background: "images/hero.jpg".into(),
            primary: CallToAction {
                label: "Learn More".into(),
                target: SectionId::About,
            },
            secondary: CallToAction {
                label: "Contact Us".into(),
                target: SectionId::Contact,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    pub heading: String,
    pub tagline: String,
    /// Markdown.
    pub body: String,
    pub features: Vec<Feature>,
    pub image: String,
    pub badge_value: String,
    pub badge_label: String,
}

impl Default for About {
    fn default() -> Self {
        Self {
            heading: "About QalimTech Farms".into(),
            tagline: "A passion for sustainable and ethical farming is at the heart of \
                      everything we do"
                .into(),
            body: "Welcome to Qalimtech Farms, where our passion for sustainable and ethical \
                   farming is at the heart of everything we do. Founded with a vision to \
                   provide the highest quality poultry and pork products, we are committed to \
                   the well-being of our animals and the satisfaction of our customers.\n\n\
                   Our team comprises experienced farmers, animal care specialists, and \
                   dedicated staff who work tirelessly to maintain the highest standards of \
                   care. We believe in combining time-honored farming traditions with modern, \
                   innovative techniques.\n"
                .into(),
            features: vec![
                Feature {
                    title: "Sustainable Practices".into(),
                    description: "We implement eco-friendly farming methods that minimize \
                                  environmental impact while maximizing animal welfare."
                        .into(),
                },
                Feature {
                    title: "Quality Feed".into(),
                    description: "Our animals receive premium, carefully formulated feed to \
                                  ensure optimal health and nutrition."
                        .into(),
                },
                Feature {
                    title: "Animal Welfare".into(),
                    description: "We prioritize the comfort and well-being of our animals, \
                                  providing spacious and clean environments."
                        .into(),
                },
            ],
            image: "images/about.jpg".into(),
            badge_value: "7+".into(),
            badge_label: "Years of Excellence".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Products {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Product>,
}

impl Default for Products {
    fn default() -> Self {
        Self {
            heading: "Our Products".into(),
            intro: "From farm to your table, experience the difference of ethically raised \
                    and responsibly sourced meat products."
                .into(),
            items: vec![
                Product {
                    name: "Farm Fresh Chicken".into(),
                    description: "Our chickens are raised in a free-range environment, \
                                  ensuring tender, flavorful meat and high-quality eggs."
                        .into(),
                    image: "images/chicken.jpg".into(),
                    features: vec![
                        "Free-range".into(),
                        "No hormones".into(),
                        "Rich in protein".into(),
                    ],
                    price: "₦ 2,500 / kg".into(),
                },
                Product {
                    name: "Premium Pork".into(),
                    description: "Our pigs are fed a balanced, nutritious diet, resulting in \
                                  lean, succulent pork with exceptional taste."
                        .into(),
                    image: "images/pig.jpg".into(),
                    features: vec![
                        "Naturally raised".into(),
                        "Lean and tender".into(),
                        "Versatile for cooking".into(),
                    ],
                    price: "₦ 3,200 / kg".into(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gallery {
    pub heading: String,
    pub intro: String,
    pub images: Vec<GalleryImage>,
}

impl Gallery {
    pub fn sources(&self) -> Vec<String> {
        self.images.iter().map(|i| i.src.clone()).collect()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            heading: "Our Gallery".into(),
            intro: "Take a visual tour of our farm and see our well-cared-for animals in \
                    their natural environment"
                .into(),
            images: (1..=6)
                .map(|n| GalleryImage {
                    src: format!("images/gallery-{n}.jpg"),
                    alt: format!("Gallery Image {n}"),
                    title: "Farm Life".into(),
                    caption: "Experience the natural beauty of QalimTech Farms".into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Testimonials {
    pub heading: String,
    pub items: Vec<Testimonial>,
}

impl Default for Testimonials {
    fn default() -> Self {
        Self {
            heading: "What Our Customers Say".into(),
            items: vec![
                Testimonial {
                    name: "Mr Victor Omolalde".into(),
                    role: "Family Consumer".into(),
                    content: "The quality of poultry from QalimTech Farms has transformed our \
                              menu. Our customers constantly compliment the taste and \
                              tenderness of the meat."
                        .into(),
                    avatar: "images/avatar-1.jpg".into(),
                },
                Testimonial {
                    name: "Mr Segun Adekaiyaja".into(),
                    role: "Family Consumer".into(),
                    content: "We've been buying eggs and meat from QalimTech for over a year \
                              now. The difference in quality compared to supermarket products \
                              is remarkable."
                        .into(),
                    avatar: "images/avatar-2.jpg".into(),
                },
                Testimonial {
                    name: "Mrs Favour".into(),
                    role: "Food Distributor".into(),
                    content: "QalimTech Farms has been our most reliable supplier. Their \
                              commitment to ethical farming practices aligns perfectly with \
                              our brand values."
                        .into(),
                    avatar: "images/avatar-3.jpg".into(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub address: Vec<String>,
    pub hours: Vec<OpeningHours>,
    pub socials: Vec<SocialLink>,
}

impl Default for Contact {
    fn default() -> Self {
        let hours = |days: &str, hours: &str| OpeningHours {
            days: days.into(),
            hours: hours.into(),
        };
        let social = |name: &str, url: &str| SocialLink {
            name: name.into(),
            url: url.into(),
        };
        Self {
            heading: "Get in Touch".into(),
            intro: "Have questions or interested in our products? Reach out to us and we'll \
                    get back to you soon"
                .into(),
            email: "oalimi@yahoo.com".into(),
            phone: "+234 80377 77719".into(),
            address: vec![
                "Ayetodo Farms".into(),
                "Agric Ojo".into(),
                "Lagos, Nigeria".into(),
            ],
            hours: vec![
                hours("Monday - Friday", "8:00 AM - 5:00 PM"),
                hours("Saturday", "9:00 AM - 2:00 PM"),
                hours("Sunday", "Closed"),
            ],
            socials: vec![
                social("Facebook", "https://facebook.com/"),
                social("Instagram", "https://instagram.com/"),
                social("Twitter", "https://twitter.com/"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub blurb: String,
    pub newsletter_intro: String,
    pub credit: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            blurb: "Dedicated to providing Nigeria with the highest quality, ethically raised \
                    poultry and pork products."
                .into(),
            newsletter_intro: "Stay updated with our latest news and offers.".into(),
            credit: "Designed by Omolade".into(),
        }
    }
}

impl SiteContent {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::Validation("brand.name must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for image in &self.gallery.images {
            if image.src.trim().is_empty() {
                return Err(ContentError::Validation(
                    "gallery.images entries need a src".into(),
                ));
            }
            if !seen.insert(image.src.as_str()) {
                return Err(ContentError::Validation(format!(
                    "gallery image {} is listed more than once",
                    image.src
                )));
            }
        }
        for product in &self.products.items {
            if product.name.trim().is_empty() {
                return Err(ContentError::Validation(
                    "products.items entries need a name".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Load `content.toml` from `dir` on top of the stock copy.
pub fn load_content(dir: &Path) -> Result<SiteContent, ContentError> {
    let base = toml::Value::try_from(SiteContent::default())?;
    let merged = match config::load_raw_toml(dir, CONTENT_FILE)? {
        Some(overlay) => config::merge_toml(base, overlay),
        None => base,
    };
    let content: SiteContent = merged.try_into()?;
    content.validate()?;
    Ok(content)
}

/// The stock copy as a `content.toml`, for the `gen-content` command.
pub fn stock_content_toml() -> Result<String, ContentError> {
    let body = toml::to_string_pretty(&SiteContent::default())?;
    Ok(format!(
        "# QalimTech Farms page copy\n\
         # Override any table or array below in site/content.toml.\n\
         # Arrays replace the stock list wholesale.\n\n{body}"
    ))
}
