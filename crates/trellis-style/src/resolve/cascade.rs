//! Provider cascading logic.

use crate::provider::StyleProvider;
use crate::style::StyleSet;

/// Replace `target` with the merge of `providers`, in iteration order.
///
/// Later providers override earlier ones for every `(name, state)` they set.
/// Each provider's set is dropped right after it is merged.
pub fn cascade_providers<'a, I>(target: &mut StyleSet, providers: I)
where
    I: IntoIterator<Item = &'a dyn StyleProvider>,
{
    target.clear();
    for provider in providers {
        let style = provider.style();
        target.merge(&style, true);
    }
}
