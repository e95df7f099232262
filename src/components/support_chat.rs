//! The Beacon support chat widget.

use std::rc::Rc;

use leptos::prelude::*;

use crate::chat::ChatClient;
use crate::state::chat::{CONNECTION_ERROR, Role, Transcript};
use crate::util::phone::{Segment, segment_phones};

/// Assistant message text with recognized helpline numbers rendered as
/// tappable `tel:` links.
fn linkified(text: &str) -> impl IntoView + use<> {
    segment_phones(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Phone(ref number) => {
                let href = segment.tel_href().unwrap_or_default();
                view! {
                    <a class="chat__tel" href=href>
                        {number.clone()}
                    </a>
                }
                .into_any()
            }
            Segment::Text(text) => text.into_any(),
        })
        .collect_view()
}

#[component]
pub fn SupportChat() -> impl IntoView {
    let client = Rc::new(ChatClient::from_build_config());
    let transcript = RwSignal::new(Transcript::default());
    let input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view as chunks stream in.
    Effect::new(move || {
        let _ = transcript.get().messages().len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move |client: Rc<ChatClient>| {
        let text = input.get().trim().to_owned();
        if text.is_empty() || busy.get() {
            return;
        }

        input.set(String::new());
        error.set(None);
        busy.set(true);
        transcript.update(|t| {
            t.push_user(text.clone());
            t.begin_reply();
        });

        leptos::task::spawn_local(async move {
            let result = client
                .send(&text, &mut |chunk| {
                    transcript.update(|t| t.append_chunk(chunk));
                })
                .await;
            if let Err(e) = result {
                log::error!("chat: {e}");
                transcript.update(Transcript::roll_back_exchange);
                error.set(Some(CONNECTION_ERROR));
            }
            busy.set(false);
        });
    };

    let submit_client = Rc::clone(&client);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send(Rc::clone(&submit_client));
    };

    let can_send = move || !busy.get() && !input.get().trim().is_empty();

    view! {
        <div class="chat">
            <div class="chat__messages" node_ref=messages_ref>
                <Show when=move || transcript.get().is_empty()>
                    <div class="chat__empty">
                        <p>"You can ask things like:"</p>
                        <p class="chat__empty-example">"\"I feel an urge to drink, what can I do?\""</p>
                    </div>
                </Show>
                {move || {
                    transcript
                        .get()
                        .messages()
                        .iter()
                        .map(|msg| {
                            let row = match msg.role {
                                Role::User => "chat__row chat__row--user",
                                Role::Model => "chat__row chat__row--model",
                            };
                            let bubble = match msg.role {
                                Role::User => "chat__bubble chat__bubble--user",
                                Role::Model => "chat__bubble chat__bubble--model",
                            };
                            let body = match msg.role {
                                Role::User => msg.text.clone().into_any(),
                                Role::Model => linkified(&msg.text).into_any(),
                            };
                            view! {
                                <div class=row>
                                    <p class=bubble>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="chat__error">{message}</div> })
                }}
            </div>
            <form class="chat__input-row" on:submit=on_submit>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask for guidance..."
                    prop:value=move || input.get()
                    disabled=move || busy.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn--primary chat__send"
                    disabled=move || !can_send()
                    aria-label="Send message"
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
