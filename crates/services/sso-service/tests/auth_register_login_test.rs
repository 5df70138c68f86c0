//! Functional tests driving the gRPC surface end to end.

mod suite;

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tonic::Code;

use proto::sso::{IsAdminRequest, LoginRequest, RegisterRequest};
use sso_service_lib::service::Claims;

use suite::{Suite, TEST_APP_ID, TEST_APP_SECRET, TOKEN_TTL_SECONDS};

const EXP_DELTA_SECONDS: i64 = 5;

fn decode_claims(token: &str) -> Claims {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_APP_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("token must decode with the app secret")
    .claims
}

#[tokio::test]
async fn register_login_happy_path() {
    let mut st = Suite::start().await;

    let user_id = st
        .client
        .register(RegisterRequest {
            email: "happy@example.com".to_string(),
            password: "password1".to_string(),
        })
        .await
        .expect("register")
        .into_inner()
        .user_id;
    assert!(user_id > 0);

    let res = st
        .client
        .login(LoginRequest {
            email: "happy@example.com".to_string(),
            password: "password1".to_string(),
            app_id: TEST_APP_ID,
        })
        .await
        .expect("login")
        .into_inner();
    let login_time = Utc::now();

    assert!(!res.token.is_empty());

    let claims = decode_claims(&res.token);
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.email, "happy@example.com");
    assert_eq!(claims.app_id, TEST_APP_ID);

    let expected_exp = login_time.timestamp() + TOKEN_TTL_SECONDS;
    assert!((claims.exp - expected_exp).abs() <= EXP_DELTA_SECONDS);
}

#[tokio::test]
async fn duplicated_registration_is_a_conflict() {
    let mut st = Suite::start().await;

    let req = RegisterRequest {
        email: "dup@example.com".to_string(),
        password: "password1".to_string(),
    };

    let user_id = st
        .client
        .register(req.clone())
        .await
        .expect("first register")
        .into_inner()
        .user_id;
    assert!(user_id > 0);

    // Same email with a different password still conflicts
    let status = st
        .client
        .register(RegisterRequest {
            password: "password2".to_string(),
            ..req
        })
        .await
        .expect_err("second register must fail");
    assert_eq!(status.code(), Code::AlreadyExists);
    assert!(status.message().contains("User already exists"));
}

#[tokio::test]
async fn register_fail_cases() {
    let mut st = Suite::start().await;

    let cases = [
        ("empty password", "fail@example.com", "", "Field 'password' is required"),
        ("empty email", "", "password1", "Field 'email' is required"),
        ("empty email and password", "", "", "Field 'email' is required"),
        (
            "short password",
            "fail@example.com",
            "passwd7",
            "Field 'password' requires at least 8 characters",
        ),
        (
            "invalid email",
            "not-an-email",
            "password1",
            "Field 'email' is invalid",
        ),
    ];

    for (name, email, password, want) in cases {
        let status = st
            .client
            .register(RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument, "case: {}", name);
        assert!(
            status.message().contains(want),
            "case: {}, got: {}",
            name,
            status.message()
        );
    }
}

#[tokio::test]
async fn login_fail_cases() {
    let mut st = Suite::start().await;

    st.client
        .register(RegisterRequest {
            email: "known@example.com".to_string(),
            password: "password1".to_string(),
        })
        .await
        .expect("register");

    let cases = [
        (
            "empty email",
            "",
            "password1",
            TEST_APP_ID,
            Code::InvalidArgument,
            "Field 'email' is required",
        ),
        (
            "empty password",
            "known@example.com",
            "",
            TEST_APP_ID,
            Code::InvalidArgument,
            "Field 'password' is required",
        ),
        (
            "zero app id",
            "known@example.com",
            "password1",
            0,
            Code::InvalidArgument,
            "Field 'app_id' is required",
        ),
        (
            "negative app id",
            "known@example.com",
            "password1",
            -1,
            Code::InvalidArgument,
            "Field 'app_id' is invalid",
        ),
        (
            "unknown account",
            "ghost@example.com",
            "password1",
            TEST_APP_ID,
            Code::InvalidArgument,
            "Invalid credentials",
        ),
        (
            "wrong password",
            "known@example.com",
            "wrongpw12",
            TEST_APP_ID,
            Code::InvalidArgument,
            "Invalid credentials",
        ),
        (
            "unknown app",
            "known@example.com",
            "password1",
            42,
            Code::NotFound,
            "App not found",
        ),
    ];

    for (name, email, password, app_id, want_code, want_message) in cases {
        let status = st
            .client
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
                app_id,
            })
            .await
            .unwrap_err();

        assert_eq!(status.code(), want_code, "case: {}", name);
        assert!(
            status.message().contains(want_message),
            "case: {}, got: {}",
            name,
            status.message()
        );
    }
}

#[tokio::test]
async fn credential_failures_are_indistinguishable() {
    let mut st = Suite::start().await;

    st.client
        .register(RegisterRequest {
            email: "real@example.com".to_string(),
            password: "password1".to_string(),
        })
        .await
        .expect("register");

    let wrong_password = st
        .client
        .login(LoginRequest {
            email: "real@example.com".to_string(),
            password: "wrongpw12".to_string(),
            app_id: TEST_APP_ID,
        })
        .await
        .unwrap_err();

    let unknown_email = st
        .client
        .login(LoginRequest {
            email: "ghost@example.com".to_string(),
            password: "password1".to_string(),
            app_id: TEST_APP_ID,
        })
        .await
        .unwrap_err();

    assert_eq!(wrong_password.code(), unknown_email.code());
    assert_eq!(wrong_password.message(), unknown_email.message());
}

#[tokio::test]
async fn is_admin_defaults_to_false() {
    let mut st = Suite::start().await;

    let user_id = st
        .client
        .register(RegisterRequest {
            email: "plain@example.com".to_string(),
            password: "password1".to_string(),
        })
        .await
        .expect("register")
        .into_inner()
        .user_id;

    let res = st
        .client
        .is_admin(IsAdminRequest { user_id })
        .await
        .expect("is_admin")
        .into_inner();
    assert!(!res.is_admin);

    st.storage.set_admin(user_id, true).await.expect("set admin");

    let res = st
        .client
        .is_admin(IsAdminRequest { user_id })
        .await
        .expect("is_admin")
        .into_inner();
    assert!(res.is_admin);
}

#[tokio::test]
async fn is_admin_fail_cases() {
    let mut st = Suite::start().await;

    let status = st
        .client
        .is_admin(IsAdminRequest { user_id: 42 })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("User not found"));

    let status = st
        .client
        .is_admin(IsAdminRequest { user_id: 0 })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().contains("Field 'user_id' is required"));
}

#[tokio::test]
async fn validation_failures_never_reach_the_store() {
    let mut st = Suite::start().await;

    let status = st
        .client
        .register(RegisterRequest {
            email: "short@example.com".to_string(),
            password: "passwd7".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    assert_eq!(st.storage.user_count().await, 0);
}
