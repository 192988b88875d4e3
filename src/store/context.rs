use std::cell::{Ref, RefCell};
use std::rc::Rc;

use yew::prelude::*;

use crate::store::content::ContentStore;
use crate::store::storage::BrowserStorage;

pub type SiteStore = ContentStore<BrowserStorage>;

/// Bumped after every mutation so context consumers re-render.
struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Revision(self.0 + 1))
    }
}

/// Shared handle to the one content store of the page.
#[derive(Clone)]
pub struct ContentHandle {
    store: Rc<RefCell<SiteStore>>,
    revision: u64,
    changed: UseReducerDispatcher<Revision>,
}

impl PartialEq for ContentHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.revision == other.revision
    }
}

impl ContentHandle {
    pub fn read(&self) -> Ref<'_, SiteStore> {
        self.store.borrow()
    }

    /// Run a mutation and notify every component reading the store.
    pub fn update<R>(&self, f: impl FnOnce(&mut SiteStore) -> R) -> R {
        let result = f(&mut self.store.borrow_mut());
        self.changed.dispatch(());
        result
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentProviderProps {
    pub children: Children,
}

#[function_component(ContentProvider)]
pub fn content_provider(props: &ContentProviderProps) -> Html {
    let store = use_memo(|_| RefCell::new(ContentStore::load(BrowserStorage::open())), ());
    let revision = use_reducer(|| Revision(0));

    // Mirror the loaded state once so first-time visitors get every key.
    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(e) = store.borrow().flush() {
                    log::warn!("Initial content save failed: {}", e);
                }
                || ()
            },
            (),
        );
    }

    let handle = ContentHandle {
        store,
        revision: revision.0,
        changed: revision.dispatcher(),
    };

    html! {
        <ContextProvider<ContentHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ContentHandle>>
    }
}

#[hook]
pub fn use_content() -> ContentHandle {
    use_context::<ContentHandle>().expect("use_content called outside ContentProvider")
}
