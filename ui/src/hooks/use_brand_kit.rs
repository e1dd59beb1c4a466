use std::cell::{Cell, Ref, RefCell};
use std::pin::pin;
use std::rc::Rc;

use futures::future::{AbortHandle, Either, abortable, select};
use gloo_timers::future::TimeoutFuture;
use payloads::brand_kit::{
    BrandKit, BrandKitError, BrandKitSession, GenerationFailure,
    GenerationTicket, LogoError, LogoImage,
};
use payloads::{CustomizationUpdate, GenAiClient};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_genai_client};

/// Session shared by every handle of one drawer. Each change bumps
/// `revision`.
#[derive(Default)]
struct SharedSession {
    session: RefCell<BrandKitSession>,
    revision: Cell<u64>,
}

impl SharedSession {
    fn modify(&self, f: impl FnOnce(&mut BrandKitSession)) {
        f(&mut self.session.borrow_mut());
        self.revision.set(self.revision.get().wrapping_add(1));
    }
}

/// The shared session as it was when a handle was built. Two views are
/// equal only if nothing changed in between, so components taking a
/// handle as a prop re-render after every session change.
#[derive(Clone)]
struct SessionView {
    shared: Rc<SharedSession>,
    revision: u64,
}

impl SessionView {
    fn new(shared: Rc<SharedSession>) -> Self {
        let revision = shared.revision.get();
        Self { shared, revision }
    }
}

impl PartialEq for SessionView {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
            && self.revision == other.revision
    }
}

/// Brand kit state for the lifetime of the customization drawer.
///
/// Generated colors and names are written straight into the store. The
/// request in flight is dropped when the drawer unmounts.
#[derive(Clone)]
pub struct BrandKitHandle {
    view: SessionView,
    pending: Rc<RefCell<Option<AbortHandle>>>,
    rerender: UseForceUpdateHandle,
    dispatch: Dispatch<State>,
}

impl PartialEq for BrandKitHandle {
    fn eq(&self, other: &Self) -> bool {
        self.view == other.view
    }
}

impl BrandKitHandle {
    pub fn session(&self) -> Ref<'_, BrandKitSession> {
        self.view.shared.session.borrow()
    }

    fn update(&self, f: impl FnOnce(&mut BrandKitSession)) {
        self.view.shared.modify(f);
        self.rerender.force_update();
    }

    fn customize(&self, update: CustomizationUpdate) {
        self.dispatch.reduce_mut(|state| state.customize(update));
    }

    pub fn upload(&self, logo: Result<LogoImage, LogoError>) {
        self.update(|session| match logo {
            Ok(logo) => session.upload(logo),
            Err(error) => session.reject_upload(error),
        });
    }

    pub fn select_generated(&self, color: &str) {
        let update = self.session().select_generated(color);
        self.customize(update);
    }

    pub fn select_manual(&self, color: &str) {
        let mut update = None;
        self.update(|session| update = Some(session.select_manual(color)));
        if let Some(update) = update {
            self.customize(update);
        }
    }

    pub fn dismiss_error(&self) {
        self.update(BrandKitSession::dismiss_error);
    }

    /// Start a generation for the uploaded logo. Does nothing while one is
    /// already running.
    pub fn generate(&self) {
        let mut begun = None;
        self.update(|session| begun = Some(session.begin()));
        let (ticket, logo) = match begun {
            Some(Ok(begun)) => begun,
            Some(Err(BrandKitError::Busy)) | None => return,
            Some(Err(error)) => {
                tracing::debug!(%error, "brand kit generation not started");
                return;
            }
        };

        let client = match get_genai_client() {
            Ok(client) => client,
            Err(error) => {
                self.complete(ticket, Err(error.into()));
                return;
            }
        };

        let (request, abort) = abortable(generate_with_timeout(client, logo));
        if let Some(previous) = self.pending.replace(Some(abort)) {
            previous.abort();
        }

        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            // aborted when the drawer closed
            let Ok(result) = request.await else {
                return;
            };
            handle.pending.borrow_mut().take();
            handle.complete(ticket, result);
        });
    }

    fn complete(
        &self,
        ticket: GenerationTicket,
        result: Result<BrandKit, GenerationFailure>,
    ) {
        let mut update = None;
        self.update(|session| update = session.finish(ticket, result));
        if let Some(update) = update {
            self.customize(update);
        }
    }

    fn cancel(&self) {
        if let Some(abort) = self.pending.borrow_mut().take() {
            abort.abort();
        }
        self.view.shared.modify(BrandKitSession::cancel);
    }
}

/// The HTTP client only enforces its timeout natively, so in the browser the
/// request races a timer.
async fn generate_with_timeout(
    client: GenAiClient,
    logo: LogoImage,
) -> Result<BrandKit, GenerationFailure> {
    let timeout = client.timeout();
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let request = pin!(client.generate_brand_kit(&logo));
    let timer = pin!(TimeoutFuture::new(millis));

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(GenerationFailure::TimedOut(timeout)),
    }
}

#[hook]
pub fn use_brand_kit() -> BrandKitHandle {
    let shared = use_memo((), |_| SharedSession::default());
    let pending = use_mut_ref(|| None::<AbortHandle>);
    let rerender = use_force_update();
    let dispatch = use_dispatch::<State>();

    let handle = BrandKitHandle {
        view: SessionView::new(shared),
        pending,
        rerender,
        dispatch,
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| move || handle.cancel());
    }

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> LogoImage {
        LogoImage::new(vec![0x89, b'P', b'N', b'G'], "image/png").unwrap()
    }

    #[test]
    fn test_views_differ_after_each_session_change() {
        let shared = Rc::new(SharedSession::default());
        let initial = SessionView::new(shared.clone());
        assert!(initial == SessionView::new(shared.clone()));

        shared.modify(|session| session.upload(logo()));
        let uploaded = SessionView::new(shared.clone());
        assert!(initial != uploaded);
        assert!(shared.session.borrow().can_generate());

        let mut ticket = None;
        shared.modify(|session| {
            ticket = session.begin().ok().map(|(ticket, _)| ticket);
        });
        let busy = SessionView::new(shared.clone());
        assert!(uploaded != busy);
        assert!(shared.session.borrow().is_busy());

        let ticket = ticket.expect("generation should start");
        let json = r##"{"palette": ["#112233", "#445566"]}"##;
        let kit = BrandKit::from_json(json).unwrap();
        shared.modify(|session| {
            session.finish(ticket, Ok(kit));
        });
        let finished = SessionView::new(shared.clone());
        assert!(busy != finished);
        assert!(!shared.session.borrow().is_busy());
        assert_eq!(shared.session.borrow().palette().len(), 2);
    }

    #[test]
    fn test_manual_selection_and_cancel_change_view() {
        let shared = Rc::new(SharedSession::default());
        let before = SessionView::new(shared.clone());
        shared.modify(|session| {
            session.select_manual("#123456");
        });
        let after = SessionView::new(shared.clone());
        assert!(before != after);

        shared.modify(BrandKitSession::cancel);
        assert!(after != SessionView::new(shared));
    }

    #[test]
    fn test_views_of_different_drawers_differ() {
        let a = SessionView::new(Rc::new(SharedSession::default()));
        let b = SessionView::new(Rc::new(SharedSession::default()));
        assert!(a != b);
        assert!(a == a.clone());
    }
}
