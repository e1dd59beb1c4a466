use payloads::CustomizationUpdate;
use payloads::auth::AuthSession;
use yewdux::prelude::*;

pub use payloads::CustomizationState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Branding (edited in the customization drawer) ===
    pub customization: CustomizationState,

    // === Authentication (set by the auth modal, cleared by sign out) ===
    pub auth_session: AuthSession,

    // === Overlays (opened from the header) ===
    pub panel_open: bool,
    pub auth_modal_open: bool,
}

impl State {
    pub fn customize(&mut self, update: CustomizationUpdate) {
        if update.is_empty() {
            return;
        }
        tracing::debug!(?update, "customization changed");
        self.customization.apply(update);
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth_session.is_signed_in()
    }

    pub fn sign_in(&mut self, session: AuthSession) {
        tracing::info!(?session, "signed in");
        self.auth_session = session;
        self.auth_modal_open = false;
    }

    pub fn sign_out(&mut self) {
        tracing::info!("signed out");
        self.auth_session = AuthSession::SignedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::CustomizationField;

    #[test]
    fn test_sign_in_closes_modal() {
        let mut state = State {
            auth_modal_open: true,
            ..Default::default()
        };
        state.sign_in(AuthSession::SignedIn {
            email: "a@b.com".into(),
        });
        assert!(state.is_signed_in());
        assert!(!state.auth_modal_open);

        state.sign_out();
        assert!(!state.is_signed_in());
    }

    #[test]
    fn test_customize_merges() {
        let mut state = State::default();
        state.customize(CustomizationUpdate::field(
            CustomizationField::BrandName,
            "Taj",
        ));
        assert_eq!(state.customization.brand_name, "Taj");
        assert_eq!(
            state.customization.primary_color,
            CustomizationState::default().primary_color
        );
    }
}
