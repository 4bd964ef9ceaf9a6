//! Ordered Set Demo Entry Point
//!
//! Walks through the typed set and the handle API: insert, lookup of present
//! and missing elements, deep copies, erase and assignment. Set `RUST_LOG`
//! to `ordset=trace` to see every engine mutation.

use ordset::engine::{CompareFn, CopyFn, DestroyFn, handle};
use ordset::typed::{OrderedSet, SetError};
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn typed_walkthrough() -> Result<(), SetError> {
    let mut set: OrderedSet<i32> = OrderedSet::new();
    set.insert(&2)?;
    set.insert(&1)?;
    tracing::info!("{} is in set", set.get(set.find(&1)?)?);
    tracing::info!("{} is in set", set.get(set.find(&2)?)?);

    match set.find(&3) {
        Err(SetError::ElementNotFound) => tracing::info!("missing element reported as not found"),
        other => tracing::warn!(?other, "unexpected lookup result"),
    }

    let mut copy = set.try_clone()?;
    tracing::info!("{} is in copy", copy.get(copy.find(&2)?)?);
    copy.erase(&2)?;
    if copy.find(&2).is_err() {
        tracing::info!("erase works, 2 removed from copy");
    }
    tracing::info!(original = %set, copy = %copy, "copies are independent");

    let mut assigned: OrderedSet<i32> = OrderedSet::new();
    assigned.assign_from(&copy)?;
    tracing::info!(assigned = %assigned, "assignment done");
    Ok(())
}

fn handle_walkthrough() {
    let copy: CopyFn<String> = Rc::new(|element: &String| Some(element.clone()));
    let destroy: DestroyFn<String> = Rc::new(|element: String| {
        tracing::debug!(%element, "destroying element");
    });
    let compare: CompareFn<String> = Rc::new(|left: &String, right: &String| left.cmp(right));

    let mut set = handle::create(Some(copy), Some(destroy), Some(compare));
    for word in ["pear", "apple", "fig", "apple"] {
        let status = handle::add(set.as_mut(), &word.to_string());
        tracing::info!(word, ?status, "add");
    }
    let words: Vec<&String> = handle::elements(set.as_ref()).collect();
    tracing::info!(?words, size = ?handle::size(set.as_ref()), "handle contents");
    handle::destroy(set);
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ordset=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ordered set demo...");

    if let Err(error) = typed_walkthrough() {
        tracing::error!(%error, "typed walkthrough failed");
    }
    handle_walkthrough();

    tracing::info!("Demo finished");
}
