use std::fmt;

use crate::{
    model::{champion::Champion, tag::TagFilter},
    service::progress_store::ProgressStore,
};

/// Champions matching `filter`, in catalog order.
pub fn visible_champions<'a>(all: &'a [Champion], filter: TagFilter) -> Vec<&'a Champion> {
    match filter.tag() {
        None => all.iter().collect(),
        Some(tag) => all.iter().filter(|c| c.has_tag(tag)).collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

pub fn completion_summary(all: &[Champion], store: &ProgressStore) -> CompletionSummary {
    let completed = all.iter().filter(|c| store.is_done(&c.id)).count();
    let total = all.len();
    let percent = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    CompletionSummary {
        completed,
        total,
        percent,
    }
}

impl fmt::Display for CompletionSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} / {} champions completed ({:.1}%)",
            self.completed, self.total, self.percent
        )
    }
}
