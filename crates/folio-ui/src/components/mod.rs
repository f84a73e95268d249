//! Reusable UI components

pub mod contact_form;
pub mod nav_bar;
pub mod particles;
pub mod resume;
pub mod reveal;
pub mod scroll_top;
pub mod section_nav;
pub mod skill_bars;
pub mod social_links;
pub mod stat_counter;
pub mod tilt_card;
pub mod toast;
pub mod typing_text;

pub use contact_form::ContactPanel;
pub use nav_bar::{NavBar, Navigation, provide_navigation, use_navigation};
pub use particles::ParticleField;
pub use resume::ResumeButton;
pub use reveal::{RevealGroup, use_reveal};
pub use scroll_top::{ScrollToTop, use_scroll_flag};
pub use section_nav::SectionNav;
pub use skill_bars::SkillBars;
pub use social_links::SocialLinks;
pub use stat_counter::StatCounter;
pub use tilt_card::TiltCard;
pub use toast::{ToastHost, Toasts, provide_toasts, use_toasts};
pub use typing_text::TypingText;
