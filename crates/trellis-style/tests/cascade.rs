//! Integration tests for provider cascading.

use std::sync::Arc;

use proptest::prelude::*;
use trellis_core::DebugFlags;
use trellis_style::Error;
use trellis_style::prelude::*;

const TEXT: &str = "text-color";

fn color_provider(color: Color) -> Arc<StaticStyleProvider> {
    let provider = Arc::new(StaticStyleProvider::new());
    provider.set_property(TEXT, StateType::Normal, color);
    provider
}

fn text_color(cx: &StyleContext) -> Option<PropertyValue> {
    cx.get_property(TEXT, StateType::Normal)
}

fn priorities(cx: &StyleContext) -> Vec<u32> {
    cx.providers().map(|(_, priority)| priority.value()).collect()
}

#[test]
fn higher_priority_wins_until_removed() {
    let p1 = color_provider(Color::RED);
    let p2 = color_provider(Color::BLUE);
    let p2_handle: Arc<dyn StyleProvider> = p2.clone();

    let mut cx = StyleContext::new();
    cx.add_provider(p1, StylePriority(1));
    cx.add_provider(p2, StylePriority(5));
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::BLUE)));

    assert!(cx.remove_provider(&p2_handle));
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::RED)));
}

#[test]
fn insertion_order_does_not_matter_across_priorities() {
    let mut cx = StyleContext::new();
    cx.add_provider(color_provider(Color::BLUE), StylePriority::USER);
    cx.add_provider(color_provider(Color::RED), StylePriority::FALLBACK);

    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::BLUE)));
    assert_eq!(priorities(&cx), vec![1, 800]);
}

#[test]
fn readding_moves_provider() {
    let low = color_provider(Color::RED);
    let high = color_provider(Color::BLUE);
    let low_handle: Arc<dyn StyleProvider> = low.clone();

    let mut cx = StyleContext::new();
    cx.add_provider(low.clone(), StylePriority::THEME);
    cx.add_provider(high, StylePriority::APPLICATION);
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::BLUE)));

    cx.add_provider(low.clone(), StylePriority::USER);
    assert_eq!(cx.provider_count(), 2);
    assert_eq!(priorities(&cx), vec![600, 800]);
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::RED)));

    // Adding again at the same priority is idempotent.
    let generation = cx.generation();
    let before: Vec<_> = cx.providers().map(|(_, p)| p).collect();
    let store = cx.store().clone();
    cx.add_provider(low, StylePriority::USER);
    assert_eq!(cx.providers().map(|(_, p)| p).collect::<Vec<_>>(), before);
    assert_eq!(cx.store(), &store);
    assert_eq!(cx.generation(), generation + 1);
    assert!(cx.contains_provider(&low_handle));
}

#[test]
fn equal_priorities_keep_insertion_order() {
    let first = color_provider(Color::RED);
    let second = color_provider(Color::GREEN);
    let first_handle: Arc<dyn StyleProvider> = first.clone();

    let mut cx = StyleContext::new();
    cx.add_provider(first.clone(), StylePriority::THEME);
    cx.add_provider(second, StylePriority::THEME);
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::GREEN)));

    // Re-adding puts the provider after its equals.
    cx.add_provider(first, StylePriority::THEME);
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::RED)));
    let last = cx.providers().last().map(|(p, _)| p.clone());
    assert!(last.is_some_and(|p| std::ptr::addr_eq(Arc::as_ptr(&p), Arc::as_ptr(&first_handle))));
}

#[test]
fn removing_unknown_provider_keeps_store() {
    let mut cx = StyleContext::new();
    cx.add_provider(color_provider(Color::RED), StylePriority::THEME);
    let generation = cx.generation();

    let stranger: Arc<dyn StyleProvider> = color_provider(Color::BLUE);
    assert!(!cx.remove_provider(&stranger));
    assert_eq!(cx.generation(), generation);
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::RED)));
}

#[test]
fn provider_changes_need_invalidate() {
    let provider = color_provider(Color::RED);
    let mut cx = StyleContext::new();
    cx.add_provider(provider.clone(), StylePriority::APPLICATION);

    provider.set_property(TEXT, StateType::Normal, Color::GREEN);
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::RED)));

    cx.invalidate();
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::GREEN)));

    provider.unset_property(TEXT, StateType::Normal);
    cx.invalidate();
    // Unset falls back to the registered default.
    assert_eq!(text_color(&cx), Some(PropertyValue::Color(Color::BLACK)));
}

#[test]
fn states_resolve_independently() {
    let theme = Arc::new(StaticStyleProvider::new());
    theme.set_for_all_states("background-color", Color::WHITE);
    let app = Arc::new(StaticStyleProvider::new());
    app.set_property("background-color", StateType::Prelight, Color::BLUE);

    let mut cx = StyleContext::new();
    cx.add_provider(app, StylePriority::APPLICATION);
    cx.add_provider(theme, StylePriority::THEME);

    assert_eq!(
        cx.get_property("background-color", StateType::Prelight),
        Some(PropertyValue::Color(Color::BLUE))
    );
    assert_eq!(
        cx.get_property("background-color", StateType::Selected),
        Some(PropertyValue::Color(Color::WHITE))
    );
}

#[test]
fn batched_lookup() {
    let provider = Arc::new(StaticStyleProvider::new());
    provider.set_property("padding", StateType::Active, 3);
    provider.set_property("custom-flag", StateType::Active, true);

    let mut cx = StyleContext::new();
    cx.add_provider(provider, StylePriority::SETTINGS);

    let values = cx.get_properties(
        StateType::Active,
        &["padding", "custom-flag", "border-width", "unknown"],
    );
    assert_eq!(
        values,
        vec![
            Some(PropertyValue::Int(3)),
            Some(PropertyValue::Bool(true)),
            Some(PropertyValue::Int(0)),
            None,
        ]
    );
}

#[test]
fn raw_state_conversion() {
    assert_eq!(StateType::try_from(4), Ok(StateType::Insensitive));
    assert_eq!(StateType::try_from(200), Err(Error::InvalidState(200)));
}

#[test]
fn dropping_context_releases_providers() {
    let provider = color_provider(Color::RED);
    {
        let mut cx = StyleContext::new();
        cx.add_provider(provider.clone(), StylePriority::THEME);
        assert_eq!(Arc::strong_count(&provider), 2);
    }
    assert_eq!(Arc::strong_count(&provider), 1);
}

#[test]
fn rebuild_is_traced_when_enabled() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();

    let mut cx = StyleContext::with_debug(DebugFlags::STYLE);
    cx.add_provider(color_provider(Color::RED), StylePriority::THEME);
    cx.invalidate();
    assert_eq!(cx.generation(), 2);
}

proptest! {
    #[test]
    fn last_writer_by_priority_wins(
        entries in prop::collection::vec((0u32..4, prop::option::of(0u8..=255)), 1..8),
    ) {
        let mut cx = StyleContext::new();
        for (priority, value) in &entries {
            let provider = Arc::new(StaticStyleProvider::new());
            if let Some(value) = value {
                provider.set_property("padding", StateType::Normal, i32::from(*value));
            }
            cx.add_provider(provider, StylePriority(*priority));
        }

        let ordered = priorities(&cx);
        prop_assert!(ordered.windows(2).all(|w| w[0] <= w[1]));

        // Highest priority wins; among equals the later addition wins.
        let expected = entries
            .iter()
            .enumerate()
            .filter_map(|(i, (priority, value))| value.map(|v| ((*priority, i), v)))
            .max_by_key(|(key, _)| *key)
            .map(|(_, v)| PropertyValue::Int(i32::from(v)))
            .unwrap_or(PropertyValue::Int(0));

        prop_assert_eq!(cx.get_property("padding", StateType::Normal), Some(expected));
    }
}
