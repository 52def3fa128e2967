//! Target backends, one per framework.

mod angular;
mod html;
mod react;
mod svelte;
mod vue;

use std::sync::Arc;

use pagesmith_core::application::ports::TargetBackend;

pub use angular::AngularBackend;
pub use html::HtmlBackend;
pub use react::ReactBackend;
pub use svelte::SvelteBackend;
pub use vue::VueBackend;

/// Every built-in backend.
pub fn builtin() -> Vec<Arc<dyn TargetBackend>> {
    vec![
        Arc::new(ReactBackend::new()),
        Arc::new(VueBackend::new()),
        Arc::new(SvelteBackend::new()),
        Arc::new(AngularBackend::new()),
        Arc::new(HtmlBackend::new()),
    ]
}
