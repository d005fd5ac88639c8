//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block body
///
/// # Example
///
/// ```rust,ignore
/// use registro_core::async_effect;
///
/// async_effect! {
///     let outcome = client.register(&draft).await;
///     Some(FormAction::from(outcome))
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

/// Create an `Effect::Cancellable` around an async block body
///
/// # Example
///
/// ```rust,ignore
/// use registro_core::cancellable_effect;
///
/// cancellable_effect! {
///     id: REGISTER_REQUEST,
///     async {
///         client.register(&draft).await.ok().map(|()| FormAction::Registered)
///     }
/// }
/// ```
#[macro_export]
macro_rules! cancellable_effect {
    (
        id: $id:expr,
        async { $($body:tt)* }
    ) => {
        $crate::effect::Effect::Cancellable {
            id: $id,
            effect: ::std::boxed::Box::new($crate::async_effect! { $($body)* }),
        }
    };
}
