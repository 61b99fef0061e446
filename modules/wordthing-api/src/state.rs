use std::sync::Arc;

use crate::augmenter::Augmenter;

#[derive(Clone)]
pub struct AppState {
    pub augmenter: Arc<dyn Augmenter>,
}

impl AppState {
    pub fn new(augmenter: Arc<dyn Augmenter>) -> Self {
        Self { augmenter }
    }
}
