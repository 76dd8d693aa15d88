use yew::prelude::*;

use crate::api_client;
use crate::components::bucket_control::TimeBucketControl;
use crate::components::layout::Layout;
use crate::components::top_zones::TopZonesPanel;
use crate::components::zone_map::ZoneMap;
use crate::hooks::use_fetch_view;
use crate::stores::use_time_bucket;

#[function_component(MapPage)]
pub fn map_page() -> Html {
    let (_, bucket) = use_time_bucket();
    // The payload holds every bucket; changing the bucket refreshes it anyway.
    let view = use_fetch_view(bucket, |_| async move {
        api_client::client().recent_predictions().await
    });
    let snapshot = view.forecast(bucket);

    html! {
        <Layout title="Forecast Map">
            <TimeBucketControl />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 card bg-base-100 shadow">
                    <div class="card-body">
                        <ZoneMap index={snapshot.index.clone()} />
                    </div>
                </div>
                <TopZonesPanel {snapshot} />
            </div>
        </Layout>
    }
}
