//! Contact details page.

use leptos::prelude::*;

use crate::content::CONTACT_LINKS;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <h2 class="page__title">"Contact Me"</h2>
            <ul class="contact-list">
                {CONTACT_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li class="contact-list__item">
                                <span class="contact-list__icon" aria-hidden="true">{link.icon}</span>
                                " " {link.label} ": "
                                <a href=link.href class="contact-list__link">{link.display}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
