use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-4 text-sm opacity-70">
            <p>{ t("footer.disclaimer") }</p>
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}
