use super::*;

fn toggle() -> (LanguageToggle, Rc<Toaster>) {
    let bindings = ViewBindings::default();
    let toaster = Rc::new(Toaster::new(&bindings, 3500));
    (LanguageToggle::new(&bindings, Rc::clone(&toaster)), toaster)
}

#[test]
fn starts_in_english() {
    let (lang, _) = toggle();
    assert_eq!(lang.current(), Language::English);
}

#[test]
fn toggle_switches_to_khmer_and_confirms_in_khmer() {
    let (lang, toaster) = toggle();
    assert_eq!(lang.toggle(), Language::Khmer);
    assert_eq!(lang.current(), Language::Khmer);
    let toast = toaster.current().unwrap();
    assert_eq!(toast.text, "ប្ដូរទៅភាសាខ្មែរ");
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn toggle_twice_returns_to_english() {
    let (lang, toaster) = toggle();
    lang.toggle();
    assert_eq!(lang.toggle(), Language::English);
    assert_eq!(toaster.current().map(|m| m.text), Some("Switched to English".to_owned()));
}
