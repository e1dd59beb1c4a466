use std::rc::Rc;

use payloads::{Catalog, StaticCatalog};
use yew::prelude::*;

/// Shared handle to the data source behind the home page and dashboard.
#[derive(Clone)]
pub struct CatalogContext(pub Rc<dyn Catalog>);

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self(Rc::new(StaticCatalog::demo()))
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogProviderProps {
    #[prop_or_default]
    pub catalog: CatalogContext,
    pub children: Children,
}

#[function_component]
pub fn CatalogProvider(props: &CatalogProviderProps) -> Html {
    html! {
        <ContextProvider<CatalogContext> context={props.catalog.clone()}>
            {props.children.clone()}
        </ContextProvider<CatalogContext>>
    }
}

#[hook]
pub fn use_catalog() -> Rc<dyn Catalog> {
    let context = use_context::<CatalogContext>()
        .expect("use_catalog must be used within a CatalogProvider");
    context.0
}
