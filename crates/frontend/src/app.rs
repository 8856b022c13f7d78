use crate::domain::a001_artwork::ui::list::ArtworkList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ArtworkList />
        </ConfigProvider>
    }
}
