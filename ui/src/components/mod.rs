pub mod auth_modal;
pub mod charts;
pub mod customization_panel;
pub mod hotel_card;
pub mod layout;
pub mod logo_upload;
pub mod modal;
pub mod require_auth;
pub mod toast;

pub use auth_modal::AuthModal;
pub use charts::{ChartPoint, LineChart, PieChart};
pub use customization_panel::CustomizationPanel;
pub use hotel_card::HotelCard;
pub use logo_upload::LogoUpload;
pub use modal::Modal;
pub use require_auth::RequireAuth;
pub use toast::ToastContainer;
