use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <i class="fas fa-water text-primary text-xl"></i>
                <span class="text-xl font-bold tracking-tight">{"Orca Watch"}</span>
            </div>
            <ul class="menu menu-horizontal px-1">
                <li><Link<Route> to={Route::Map} classes="nav-link"><i class="fas fa-map w-5"></i> {"Map"}</Link<Route>></li>
                <li><Link<Route> to={Route::Charts} classes="nav-link"><i class="fas fa-chart-pie w-5"></i> {"Charts"}</Link<Route>></li>
                <li><Link<Route> to={Route::Reports} classes="nav-link"><i class="fas fa-list w-5"></i> {"Reports"}</Link<Route>></li>
            </ul>
        </div>
    }
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 p-6 overflow-y-auto">
                <h1 class="text-2xl font-bold mb-4" id="page-title">{ &props.title }</h1>
                { for props.children.iter() }
            </main>
        </div>
    }
}
