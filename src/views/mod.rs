pub mod chat;
pub mod gallery;
pub mod icons;
pub mod shared;
pub mod toast;

pub use chat::ChatView;
pub use gallery::GalleryPanel;
pub use toast::ToastHost;
