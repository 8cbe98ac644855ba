use eventboard_core::{
    open_seeded_in_memory, AccountRepository, AccountService, AccountServiceError,
    RegisterRequest, Session, SqliteAccountRepository, SEED_ADMIN_USERNAME,
};

fn valid_request() -> RegisterRequest {
    RegisterRequest {
        username: "linh".to_string(),
        email: "linh@example.edu".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
    }
}

#[test]
fn register_stores_a_non_admin_account_that_can_log_in() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteAccountRepository::try_new(&mut conn).unwrap();
    let mut service = AccountService::new(repo);

    let account = service.register(&valid_request()).unwrap();
    assert_eq!(account.username, "linh");
    assert!(!account.is_admin);
    assert_ne!(account.password_digest, "hunter22", "never stored plain");

    let session = service.login("linh", "hunter22").unwrap().unwrap();
    assert_eq!(session.user_id.as_deref(), Some("linh"));
}

#[test]
fn register_collects_every_violated_rule() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteAccountRepository::try_new(&mut conn).unwrap();
    let mut service = AccountService::new(repo);

    let request = RegisterRequest {
        username: "al".to_string(),
        email: "not-an-address".to_string(),
        password: "short".to_string(),
        confirm_password: "different".to_string(),
    };

    let err = service.register(&request).unwrap_err();
    let AccountServiceError::Registration(errors) = err else {
        panic!("expected registration errors");
    };
    assert_eq!(
        errors.messages,
        vec![
            "Username must be at least 3 characters",
            "Please enter a valid email address",
            "Password must be at least 6 characters",
            "Passwords do not match",
        ]
    );
}

#[test]
fn register_rejects_taken_usernames() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteAccountRepository::try_new(&mut conn).unwrap();
    let mut service = AccountService::new(repo);

    let mut request = valid_request();
    request.username = SEED_ADMIN_USERNAME.to_string();

    let err = service.register(&request).unwrap_err();
    let AccountServiceError::Registration(errors) = err else {
        panic!("expected registration errors");
    };
    assert_eq!(errors.messages, vec!["Username already taken"]);
}

#[test]
fn login_rejects_wrong_passwords_and_unknown_users() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteAccountRepository::try_new(&mut conn).unwrap();
    let service = AccountService::new(repo);

    assert!(service
        .login(SEED_ADMIN_USERNAME, "wrong-password")
        .unwrap()
        .is_none());
    assert!(service.login("nobody", "password123").unwrap().is_none());
}

#[test]
fn is_authorized_requires_a_signed_in_admin() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteAccountRepository::try_new(&mut conn).unwrap();
    let mut service = AccountService::new(repo);

    assert!(!service.is_authorized(&Session::anonymous()).unwrap());

    service.register(&valid_request()).unwrap();
    let member = service.login("linh", "hunter22").unwrap().unwrap();
    assert!(!service.is_authorized(&member).unwrap());

    let admin = service
        .login(SEED_ADMIN_USERNAME, "password123")
        .unwrap()
        .unwrap();
    assert!(service.is_authorized(&admin).unwrap());

    let stale = Session::signed_in("deleted-user");
    assert!(!service.is_authorized(&stale).unwrap());
}

#[test]
fn seeded_admin_account_is_present_with_admin_flag() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteAccountRepository::try_new(&mut conn).unwrap();

    let admin = repo.get_account(SEED_ADMIN_USERNAME).unwrap().unwrap();
    assert!(admin.is_admin);
    assert_eq!(admin.email, "admin@example.com");
}
