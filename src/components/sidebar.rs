use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Linkerd"</h1>
                <p class="sidebar-subtitle">"Service Mesh Dashboard"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Check"</a>
                </li>
                <li class="nav-item">
                    <a href="/community" class="nav-link">"Community"</a>
                </li>
            </ul>
        </nav>
    }
}
