use yew::prelude::*;

use crate::components::charts::{HourlyPieChart, ZoneBarChart};
use crate::components::date_bar::DateBar;
use crate::components::layout::Layout;

#[function_component(ChartsPage)]
pub fn charts_page() -> Html {
    html! {
        <Layout title="Sighting Charts">
            <DateBar />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ZoneBarChart />
                <HourlyPieChart />
            </div>
        </Layout>
    }
}
