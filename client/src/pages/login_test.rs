use super::*;

#[test]
fn validate_phone_input_trims_and_requires_value() {
    assert_eq!(
        validate_phone_input("  919876543210  "),
        Ok("919876543210".to_owned())
    );
    assert_eq!(validate_phone_input("   "), Err("Enter a phone number first."));
}

#[test]
fn validate_phone_input_rejects_non_digits() {
    assert_eq!(validate_phone_input("+91 98765"), Err("Phone numbers are digits only."));
}

#[test]
fn normalize_otp_input_strips_non_digits_and_caps_length() {
    assert_eq!(normalize_otp_input("48-29-13"), "482913");
    assert_eq!(normalize_otp_input("1234567890"), "123456");
}

#[test]
fn validate_verify_input_requires_both_fields() {
    assert_eq!(
        validate_verify_input(" 919876543210 ", " 482913 "),
        Ok(("919876543210".to_owned(), "482913".to_owned()))
    );
    assert_eq!(
        validate_verify_input("", "482913"),
        Err("Enter both phone and 6-digit code.")
    );
    assert_eq!(
        validate_verify_input("919876543210", "48291"),
        Err("Enter both phone and 6-digit code.")
    );
}

#[test]
fn otp_requested_line_prefers_service_message() {
    let response = wire::OtpRequested {
        message: "OTP sent successfully".to_owned(),
        debug_otp: Some("482913".to_owned()),
    };
    assert_eq!(otp_requested_line(&response), "OTP sent successfully");

    let silent = wire::OtpRequested {
        message: String::new(),
        debug_otp: None,
    };
    assert_eq!(otp_requested_line(&silent), "OTP sent.");
}
