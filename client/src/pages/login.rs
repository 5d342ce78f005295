//! Login page driving the phone OTP flow against the auth service.
//!
//! The demo backend stubs SMS delivery and echoes the code in the request
//! response; the page surfaces that echo so the flow works end-to-end
//! without a real gateway.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

fn validate_phone_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter a phone number first.");
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone numbers are digits only.");
    }
    Ok(trimmed.to_owned())
}

fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

fn validate_verify_input(phone: &str, otp: &str) -> Result<(String, String), &'static str> {
    let phone =
        validate_phone_input(phone).map_err(|_| "Enter both phone and 6-digit code.")?;
    let otp = otp.trim();
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter both phone and 6-digit code.");
    }
    Ok((phone, otp.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn otp_requested_line(response: &wire::OtpRequested) -> String {
    if response.message.is_empty() {
        "OTP sent.".to_owned()
    } else {
        response.message.clone()
    }
}

/// Login page — request an OTP for a phone number, then verify it.
/// A verified code establishes the `{ wallet_id, phone }` session and lands
/// on the wallet dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let phone = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_otp = RwSignal::new(None::<String>);

    let on_request_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let phone_value = match validate_phone_input(&phone.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());
        echoed_otp.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_otp(&phone_value).await {
                Ok(response) => {
                    info.set(otp_requested_line(&response));
                    echoed_otp.set(response.debug_otp);
                }
                Err(e) => info.set(format!("OTP request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = phone_value;
        }
    };

    let on_verify_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (phone_value, otp_value) = match validate_verify_input(&phone.get(), &otp.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_otp(&phone_value, &otp_value).await {
                Ok(user) => {
                    crate::util::session::store(&user);
                    auth.update(|a| a.session = Some(user));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, phone_value, otp_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"BlueMint"</h1>
                <p class="login-card__subtitle">"Phone OTP"</p>
                <form class="login-form" on:submit=on_request_otp>
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="919876543210"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send OTP"
                    </button>
                </form>
                <form class="login-form" on:submit=on_verify_otp>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="482913"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(normalize_otp_input(&event_target_value(&ev)))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Verify & Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_otp.get().is_some()>
                    <p class="login-message login-message--code">
                        "OTP: "
                        <span>{move || echoed_otp.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </div>
        </div>
    }
}
