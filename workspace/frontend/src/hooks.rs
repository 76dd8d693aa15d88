use std::future::Future;
use std::rc::Rc;

use compute::FetchView;
use model::Resolution;
use yew::prelude::*;

/// Runs `fetch` whenever `deps` change and keeps the outcome in a [`FetchView`].
///
/// Every run takes a new request generation, so when the dependencies change
/// faster than the backend answers only the newest response is shown. The
/// component re-renders when a request starts and when its response is applied.
#[hook]
pub fn use_fetch_view<T, D, F, Fut>(deps: D, fetch: F) -> Rc<FetchView<T>>
where
    T: 'static,
    D: PartialEq + 'static,
    F: FnOnce(&D) -> Fut + 'static,
    Fut: Future<Output = common::Result<T>> + 'static,
{
    let view = use_memo((), |_| FetchView::<T>::new());
    let redraw = use_force_update();

    {
        let view = view.clone();
        use_effect_with(deps, move |deps| {
            let generation = view.begin();
            log::debug!("Fetch {} started", generation);
            redraw.force_update();

            let request = fetch(deps);
            wasm_bindgen_futures::spawn_local(async move {
                let result = request.await;
                match view.resolve(generation, result) {
                    Resolution::Applied => redraw.force_update(),
                    Resolution::Stale => log::debug!("Fetch {} superseded", generation),
                }
            });
            || ()
        });
    }

    view
}
