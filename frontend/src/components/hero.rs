//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Poetry to Music"</h1>
            <p class="subtitle">
                "Paste a poem and hear its shape. Lines become phrases, syllables become notes, "
                "and the mood of your words picks the key and the tempo."
            </p>
        </div>
    }
}
