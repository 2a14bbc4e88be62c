use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingBearerToken) before the verifier or database is consulted
#[tokio::test]
async fn missing_header_is_unauthorized() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = StaticIdentityVerifier::new();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &verifier, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingBearerToken))
    ));

    Ok(())
}

/// Tests headers that are present but not a bearer credential.
///
/// Expected: Err(MissingBearerToken) for a basic scheme and for an empty token
#[tokio::test]
async fn malformed_header_is_unauthorized() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = StaticIdentityVerifier::new();

    for value in ["Basic YWxpY2U6c2VjcmV0", "Bearer ", "token-without-scheme"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());

        let result = AuthGuard::new(db, &verifier, &headers).require(&[]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingBearerToken))
        ));
    }

    Ok(())
}

/// Tests a token the verifier does not accept.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejected_token_is_forbidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = StaticIdentityVerifier::new().with_token("good", "alice@example.com");
    let headers = bearer("forged");

    let result = AuthGuard::new(db, &verifier, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests the bearer-only gate needs no stored user.
///
/// Expected: Ok with the verified identity
#[tokio::test]
async fn bearer_only_gate_returns_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = StaticIdentityVerifier::new().with_token("good", "alice@example.com");
    let headers = bearer("good");

    let identity = AuthGuard::new(db, &verifier, &headers)
        .require(&[])
        .await
        .unwrap();

    assert_eq!(identity.email, "alice@example.com");

    Ok(())
}

/// Tests the admin gate for a verified caller with no stored account.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn admin_gate_requires_stored_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = StaticIdentityVerifier::new().with_token("good", "ghost@example.com");
    let headers = bearer("good");

    let result = AuthGuard::new(db, &verifier, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the admin gate for a regular user.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn admin_gate_denies_user_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = UserFactory::new(db).role("user").build().await?;
    let verifier = StaticIdentityVerifier::new().with_token("good", &user.email);
    let headers = bearer("good");

    let result = AuthGuard::new(db, &verifier, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests the admin gate for an admin.
///
/// Expected: Ok with the admin's identity
#[tokio::test]
async fn admin_gate_allows_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = UserFactory::new(db).role("admin").build().await?;
    let verifier = StaticIdentityVerifier::new().with_token("good", &admin.email);
    let headers = bearer("good");

    let identity = AuthGuard::new(db, &verifier, &headers)
        .require(&[Permission::Admin])
        .await
        .unwrap();

    assert_eq!(identity.email, admin.email);

    Ok(())
}

/// Tests that role checks are exact equality, so an admin is not a rider.
///
/// Expected: Err(AccessDenied) for an admin on the rider gate, Ok for a rider
#[tokio::test]
async fn rider_gate_is_exact_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = UserFactory::new(db).role("admin").build().await?;
    let rider = UserFactory::new(db).role("rider").build().await?;
    let verifier = StaticIdentityVerifier::new()
        .with_token("admin", &admin.email)
        .with_token("rider", &rider.email);

    let admin_headers = bearer("admin");
    let denied = AuthGuard::new(db, &verifier, &admin_headers)
        .require(&[Permission::Rider])
        .await;
    let rider_headers = bearer("rider");
    let allowed = AuthGuard::new(db, &verifier, &rider_headers)
        .require(&[Permission::Rider])
        .await;

    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));
    assert!(allowed.is_ok());

    Ok(())
}
