use std::pin::pin;
use std::rc::Rc;

use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::contact::{
    chat_link, ContactFormState, Field, RelayConfig, RelayMessage, SubmissionStatus,
    RELAY_DEADLINE_MS, SUBMITTED_RESET_DELAY_MS,
};
use crate::frontend::motion::Reveal;

enum FormAction {
    Edit(Field, String),
    SubmitRequested,
    Completed(bool),
    Acknowledge,
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::SubmitRequested => {
                // validation errors and the busy guard are recorded on the
                // state itself; the network call is driven by the status
                // transition, not by this action
                let _ = next.submit();
            }
            FormAction::Completed(delivered) => next.complete(delivered),
            FormAction::Acknowledge => next.acknowledge(),
        }
        next.into()
    }
}

async fn send_relay(config: RelayConfig, message: &RelayMessage) -> Result<(), &'static str> {
    let request = Request::post(config.endpoint)
        .json(&config.envelope(message))
        .map_err(|_| "failed to encode the submission")?;

    let send = pin!(request.send());
    let deadline = pin!(TimeoutFuture::new(RELAY_DEADLINE_MS));

    match select(send, deadline).await {
        Either::Left((Ok(response), _)) if response.ok() => Ok(()),
        Either::Left((Ok(_), _)) => Err("relay rejected the submission"),
        Either::Left((Err(_), _)) => Err("network failure"),
        Either::Right(((), _)) => Err("relay deadline elapsed"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub relay: RelayConfig,
    pub chat_handle: &'static str,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_reducer(ContactFormState::default);
    let status = form.status;

    // exactly one outbound call per Idle/Failed -> Sending transition
    {
        let form = form.clone();
        let relay = props.relay;
        use_effect_with(status, move |&status| {
            if status == SubmissionStatus::Sending {
                let message = RelayMessage {
                    name: form.fields.name.clone(),
                    email: form.fields.email.clone(),
                    message: form.fields.message.clone(),
                };
                let dispatcher = form.dispatcher();
                spawn_local(async move {
                    let delivered = send_relay(relay, &message).await.is_ok();
                    dispatcher.dispatch(FormAction::Completed(delivered));
                });
            }

            || ()
        });
    }

    // keep the success notice on screen briefly, then reset to Idle
    {
        let dispatcher = form.dispatcher();
        use_effect_with(status, move |&status| {
            let timer = (status == SubmissionStatus::Submitted).then(|| {
                Timeout::new(SUBMITTED_RESET_DELAY_MS, move || {
                    dispatcher.dispatch(FormAction::Acknowledge);
                })
            });

            move || drop(timer)
        });
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(FormAction::SubmitRequested);
        })
    };

    let edit_field = {
        let dispatcher = form.dispatcher();
        move |field: Field| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |event: InputEvent| {
                let value = match field {
                    Field::Message => event
                        .target_unchecked_into::<HtmlTextAreaElement>()
                        .value(),
                    _ => event.target_unchecked_into::<HtmlInputElement>().value(),
                };
                dispatcher.dispatch(FormAction::Edit(field, value));
            })
        }
    };

    let open_chat = {
        let handle = props.chat_handle;
        Callback::from(move |_: MouseEvent| {
            if let Some(win) = window() {
                let _ = win.open_with_url_and_target(&chat_link(handle), "_blank");
            }
        })
    };

    let sending = status == SubmissionStatus::Sending;

    html! {
        <section id="contact" class="section contact">
            <div class="section-inner">
                <Reveal class={classes!("contact-panel")}>
                    <h2 class="section-heading">{"Contact Me"}</h2>

                    if status == SubmissionStatus::Submitted {
                        <p class="form-notice is-success" role="status">
                            {"Message sent successfully!"}
                        </p>
                    }

                    if status == SubmissionStatus::Failed {
                        <p class="form-notice is-error" role="alert">
                            {"Transmission error. Your message was kept, please try again."}
                        </p>
                    }

                    <form class="contact-form" novalidate=true onsubmit={onsubmit}>
                        <div class="form-field">
                            <label for="contact-name">{"Your Name"}</label>
                            <input
                                id="contact-name"
                                name="name"
                                type="text"
                                placeholder="Enter your name"
                                value={form.fields.name.clone()}
                                oninput={edit_field(Field::Name)}
                            />
                            if let Some(error) = form.errors.name {
                                <p class="field-error">{error}</p>
                            }
                        </div>

                        <div class="form-field">
                            <label for="contact-email">{"Your Email"}</label>
                            <input
                                id="contact-email"
                                name="email"
                                type="email"
                                placeholder="Enter your email"
                                value={form.fields.email.clone()}
                                oninput={edit_field(Field::Email)}
                            />
                            if let Some(error) = form.errors.email {
                                <p class="field-error">{error}</p>
                            }
                        </div>

                        <div class="form-field">
                            <label for="contact-message">{"Your Message"}</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                placeholder="Write your message..."
                                value={form.fields.message.clone()}
                                oninput={edit_field(Field::Message)}
                            />
                            if let Some(error) = form.errors.message {
                                <p class="field-error">{error}</p>
                            }
                        </div>

                        <button class="button button-primary" type="submit" disabled={sending}>
                            { if sending { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>

                    <div class="contact-aside">
                        <span class="contact-aside-label">{"Prefer chat?"}</span>
                        <button class="button button-ghost" type="button" onclick={open_chat}>
                            {"Message on WhatsApp"}
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
