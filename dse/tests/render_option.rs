use std::sync::{Arc, Mutex};

use dse::handler::handler;
use dse::{OptionPropsOverride, OptionRenderProps, Runtime, Select, SelectOption};
use dse_dom::{Element, Key, Role};

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Red", "r"),
        SelectOption::new("Green", "g"),
        SelectOption::new("Blue", "b"),
    ]
}

fn open(rt: &mut Runtime<Select>) {
    let trigger = rt.component().trigger_id();
    rt.click(&trigger);
}

// ============================================================================
// Default renderer
// ============================================================================

#[test]
fn test_default_renderer_shows_label_text() {
    let mut rt = Runtime::new(Select::new(options()));
    open(&mut rt);

    let text = rt.get_by_text("Green").unwrap();
    assert!(text.has_class("dse-text"));
    assert!(text.has_class("dse-text-base"));
}

#[test]
fn test_default_renderer_checkmark_only_on_selected() {
    let select = Select::new(options());
    select.select(2).unwrap();
    let mut rt = Runtime::new(select);
    open(&mut rt);

    let checks = dse_dom::element::find_all(rt.root(), &|el| el.has_class("dse-select__check"));
    assert_eq!(checks.len(), 1);

    let blue = rt.get_all_by_role(Role::MenuItemRadio)[2];
    assert!(blue.child_elements().iter().any(|el| el.has_class("dse-select__check")));
}

#[test]
fn test_recommended_props_for_plain_option() {
    let mut rt = Runtime::new(Select::new(options()));
    open(&mut rt);

    let first = rt.get_all_by_role(Role::MenuItemRadio)[0];
    assert_eq!(first.attribute("role").as_deref(), Some("menuitemradio"));
    assert_eq!(first.attribute("aria-label").as_deref(), Some("Red"));
    assert_eq!(first.attribute("aria-checked"), None);
    assert_eq!(first.class_name(), "dse-select__option");
    assert_eq!(first.attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(Some(first.id.clone()), rt.component().option_handle(0));
}

// ============================================================================
// Custom renderer
// ============================================================================

#[test]
fn test_custom_renderer_receives_flags() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let select = Select::new(options()).render_option(move |props: &OptionRenderProps<'_>| {
        sink.lock().unwrap().push((
            props.index,
            props.option.value.clone(),
            props.is_selected,
            props.is_highlighted,
        ));
        props.bind(
            Element::text(format!("* {}", props.option.label)),
            OptionPropsOverride::default(),
        )
    });
    select.select(1).unwrap();

    let mut rt = Runtime::new(select);
    let trigger = rt.component().trigger_id();
    rt.key_down(&trigger, Key::Down);

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (0, "r".to_string(), false, true),
            (1, "g".to_string(), true, false),
            (2, "b".to_string(), false, false),
        ]
    );
    drop(seen);

    assert!(rt.get_by_text("* Green").is_ok());
}

#[test]
fn test_custom_renderer_with_bound_props_commits() {
    let committed = Arc::new(Mutex::new(None));
    let sink = committed.clone();
    let select = Select::new(options())
        .render_option(|props: &OptionRenderProps<'_>| {
            props.bind(Element::text(&props.option.label), OptionPropsOverride::default())
        })
        .on_option_select(move |option, index| {
            *sink.lock().unwrap() = Some((option.value.clone(), index));
        });

    let mut rt = Runtime::new(select);
    open(&mut rt);
    let blue = rt.get_by_text("Blue").unwrap().id.clone();
    rt.click(&blue);

    assert_eq!(*committed.lock().unwrap(), Some(("b".to_string(), 2)));
    assert!(!rt.component().is_open());
}

#[test]
fn test_custom_renderer_without_props_has_no_behaviour() {
    let select = Select::new(options())
        .render_option(|props: &OptionRenderProps<'_>| Element::text(&props.option.label));
    let mut rt = Runtime::new(select);
    open(&mut rt);

    assert!(rt.get_all_by_role(Role::MenuItemRadio).is_empty());

    let green = rt.get_by_text("Green").unwrap().id.clone();
    rt.click(&green);

    assert!(rt.component().is_open());
    assert_eq!(rt.component().selected_index(), None);
}

#[test]
fn test_focus_request_skipped_when_handle_missing() {
    let select = Select::new(options())
        .render_option(|props: &OptionRenderProps<'_>| Element::text(&props.option.label));
    let mut rt = Runtime::new(select);
    let trigger = rt.component().trigger_id();

    rt.key_down(&trigger, Key::Down);

    assert_eq!(rt.component().highlighted_index(), Some(0));
    assert_ne!(rt.focused(), rt.component().option_handle(0).as_deref());
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
fn test_override_replaces_only_named_fields() {
    let select = Select::new(options()).render_option(|props: &OptionRenderProps<'_>| {
        props.bind(
            Element::text(&props.option.label),
            OptionPropsOverride::new()
                .class_name("swatch-option")
                .aria_label(format!("Colour {}", props.option.label)),
        )
    });
    let mut rt = Runtime::new(select);
    open(&mut rt);

    let red = rt.get_all_by_role(Role::MenuItemRadio)[0];
    assert_eq!(red.class_name(), "swatch-option");
    assert_eq!(red.attribute("aria-label").as_deref(), Some("Colour Red"));
    assert_eq!(red.attribute("tabindex").as_deref(), Some("0"));
}

#[test]
fn test_override_focus_handle_renames_option() {
    let select = Select::new(options()).render_option(|props: &OptionRenderProps<'_>| {
        props.bind(
            Element::text(&props.option.label),
            OptionPropsOverride::new().focus_handle(format!("swatch-{}", props.option.value)),
        )
    });
    let mut rt = Runtime::new(select);
    open(&mut rt);

    let ids: Vec<String> = rt
        .get_all_by_role(Role::MenuItemRadio)
        .iter()
        .map(|el| el.id.clone())
        .collect();
    assert_eq!(ids, ["swatch-r", "swatch-g", "swatch-b"]);

    rt.click("swatch-g");
    assert_eq!(rt.component().selected_index(), Some(1));
}

#[test]
fn test_override_handler_wins() {
    let clicks = Arc::new(Mutex::new(0));
    let counter = clicks.clone();
    let on_click = handler(move |_| *counter.lock().unwrap() += 1);

    let select = Select::new(options()).render_option(move |props: &OptionRenderProps<'_>| {
        props.bind(
            Element::text(&props.option.label),
            OptionPropsOverride::new().on_click(on_click.clone()),
        )
    });
    let mut rt = Runtime::new(select);
    open(&mut rt);

    let red = rt.get_by_text("Red").unwrap().id.clone();
    rt.click(&red);

    assert_eq!(*clicks.lock().unwrap(), 1);
    assert!(rt.component().is_open());
    assert_eq!(rt.component().selected_index(), None);
}

#[test]
fn test_recommended_props_merge() {
    let select = Select::new(options());
    select.dispatch(dse::SelectCommand::Open { seed_highlight: true });

    let captured = Arc::new(Mutex::new(None));
    let sink = captured.clone();
    let select = select.render_option(move |props: &OptionRenderProps<'_>| {
        let merged =
            props.recommended_props(OptionPropsOverride::new().tab_index(5).role(Role::Button));
        if props.index == 0 {
            *sink.lock().unwrap() = Some(merged.clone());
        }
        merged.bind(Element::text(&props.option.label), &dse::HandlerRegistry::new())
    });
    let _rt = Runtime::new(select);

    let merged = captured.lock().unwrap().clone().unwrap();
    assert_eq!(merged.tab_index, 5);
    assert_eq!(merged.role, Role::Button);
    assert_eq!(merged.aria_label, "Red");
    assert_eq!(merged.aria_checked, None);
    assert_eq!(
        merged.class_name,
        "dse-select__option dse-select__option--highlighted"
    );
}
