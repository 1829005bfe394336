#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn startup_is_light_in_non_hydrate_tests() {
    assert_eq!(startup(), ThemePreference::Light);
}

#[test]
fn commit_echoes_preference() {
    assert_eq!(commit(ThemePreference::Dark), ThemePreference::Dark);
    assert_eq!(commit(ThemePreference::Light), ThemePreference::Light);
}
