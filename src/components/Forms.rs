use leptos::ev::SubmitEvent;
use leptos::html::{Input, Textarea};
use leptos::*;

// Submissions are logged and discarded for now; there is no transport
// behind these forms until the full site ships.

/// Quick-contact form: a single phone-number field.
#[component]
pub fn PhoneForm() -> impl IntoView {
    let phone_ref = create_node_ref::<Input>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let phone = phone_ref
            .get()
            .map(|input| input.value())
            .unwrap_or_default();
        log::info!("phone quick-contact submitted: {phone}");
    };

    view! {
        <form class="phone-form" on:submit=on_submit>
            <label class="field-label" for="phone">"Phone number"</label>
            <input
                id="phone"
                class="field"
                type="tel"
                name="phone"
                placeholder="+1 555 013 1336"
                node_ref=phone_ref
            />
            <button class="form-submit" type="submit">"Call me back"</button>
        </form>
    }
}

/// Full contact form: name, email and project details.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name_ref = create_node_ref::<Input>();
    let email_ref = create_node_ref::<Input>();
    let details_ref = create_node_ref::<Textarea>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = name_ref.get().map(|i| i.value()).unwrap_or_default();
        let email = email_ref.get().map(|i| i.value()).unwrap_or_default();
        let details = details_ref.get().map(|t| t.value()).unwrap_or_default();
        log::info!("contact form submitted: name={name} email={email} details={details}");
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label class="field-label" for="name">"Name"</label>
            <input id="name" class="field" type="text" name="name" node_ref=name_ref/>

            <label class="field-label" for="email">"Email"</label>
            <input id="email" class="field" type="email" name="email" node_ref=email_ref/>

            <label class="field-label" for="details">"Tell us about your project"</label>
            <textarea id="details" class="field field-area" name="details" rows=6 node_ref=details_ref></textarea>

            <button class="form-submit" type="submit">"Send"</button>
        </form>
    }
}
