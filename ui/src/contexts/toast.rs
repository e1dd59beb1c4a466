use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

/// How long a toast stays up unless dismissed.
const DEFAULT_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    /// Insertion order, for stable display.
    pub seq: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: BTreeMap<u64, Toast>,
    next_seq: u64,
}

pub enum ToastAction {
    Add { id: Uuid, message: String },
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Add { id, message } => {
                let seq = state.next_seq;
                state.next_seq += 1;
                state.toasts.insert(seq, Toast { id, seq, message });
            }
            ToastAction::Remove(id) => {
                state.toasts.retain(|_, toast| toast.id != id);
            }
        }
        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    /// Show a confirmation that hides itself after a few seconds.
    pub fn success(&self, message: impl Into<String>) {
        let id = Uuid::new_v4();
        let message = message.into();
        self.context.dispatch(ToastAction::Add { id, message });

        let context = self.context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEFAULT_DURATION_MS).await;
            context.dispatch(ToastAction::Remove(id));
        });
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: Rc<ToastState>, id: Uuid, message: &str) -> Rc<ToastState> {
        state.reduce(ToastAction::Add {
            id,
            message: message.into(),
        })
    }

    #[test]
    fn test_toasts_keep_insertion_order() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let state = Rc::new(ToastState::default());
        let state = add(add(add(state, a, "first"), b, "second"), c, "third");
        let messages: Vec<_> =
            state.toasts.values().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);

        let state = state.reduce(ToastAction::Remove(b));
        let ids: Vec<_> = state.toasts.values().map(|t| t.id).collect();
        assert_eq!(ids, [a, c]);
    }
}
