//! In-memory collaborators and a virtual clock for driving the landing flow
//! in native tests.

use crate::context::AppContext;
use crate::models::{LandingView, LoginInput};
use crate::platform::{
    AccountSource, IdentityProvider, LandingUi, OnLoad, RateSource, Reaction, Scheduler,
    ViewChange,
};
use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use piggy_shared::config::FrontendConfig;
use piggy_shared::models::{
    Account, ApiError, ApiResult, BearerToken, DisplayState, ExchangeRates, Session,
    SessionError, UiError,
};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiEvent {
    Focus(LoginInput),
    ClearFields,
    Alert(String),
    Reload,
    TouchInput,
    Preload(String),
}

#[derive(Default)]
pub(crate) struct FakeUi {
    view: RefCell<LandingView>,
    events: RefCell<Vec<UiEvent>>,
    user_agent: RefCell<Option<String>>,
    fail_preload: Cell<bool>,
}

impl FakeUi {
    pub(crate) fn set_user_agent(&self, agent: Option<&str>) {
        *self.user_agent.borrow_mut() = agent.map(str::to_string);
    }

    pub(crate) fn fail_preload(&self) {
        self.fail_preload.set(true);
    }

    pub(crate) fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn count(&self, predicate: impl Fn(&UiEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                UiEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[async_trait(?Send)]
impl LandingUi for FakeUi {
    fn view(&self) -> LandingView {
        self.view.borrow().clone()
    }

    fn update(&self, change: ViewChange) {
        change(&mut *self.view.borrow_mut());
    }

    fn focus(&self, input: LoginInput) {
        self.record(UiEvent::Focus(input));
    }

    fn clear_login_fields(&self) {
        self.record(UiEvent::ClearFields);
    }

    fn alert(&self, message: &str) {
        self.record(UiEvent::Alert(message.to_string()));
    }

    fn reload(&self) {
        self.record(UiEvent::Reload);
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.borrow().clone()
    }

    fn enable_touch_input(&self) {
        self.record(UiEvent::TouchInput);
    }

    async fn preload_image(&self, src: &str) -> Result<(), UiError> {
        self.record(UiEvent::Preload(src.to_string()));
        if self.fail_preload.get() {
            Err(UiError::image_load(src))
        } else {
            Ok(())
        }
    }
}

pub(crate) struct FakeIdentity {
    init_result: RefCell<Result<bool, SessionError>>,
    session: RefCell<Option<Session>>,
    on_success: RefCell<Option<Reaction>>,
    on_error: RefCell<Option<Reaction>>,
    init_calls: Cell<usize>,
    login_calls: Cell<usize>,
    logout_calls: Cell<usize>,
}

impl Default for FakeIdentity {
    fn default() -> Self {
        Self {
            init_result: RefCell::new(Ok(false)),
            session: RefCell::new(None),
            on_success: RefCell::new(None),
            on_error: RefCell::new(None),
            init_calls: Cell::new(0),
            login_calls: Cell::new(0),
            logout_calls: Cell::new(0),
        }
    }
}

impl FakeIdentity {
    /// Makes `init` report an existing session for `username`.
    pub(crate) fn sign_in(&self, token: &str, username: &str) {
        *self.session.borrow_mut() = Some(Session::new(token, username));
        *self.init_result.borrow_mut() = Ok(true);
    }

    /// Makes `init` report a session whose facts cannot be read.
    pub(crate) fn report_authenticated(&self) {
        *self.init_result.borrow_mut() = Ok(true);
    }

    pub(crate) fn fail_init(&self) {
        *self.init_result.borrow_mut() = Err(SessionError::init("keycloak.json not found"));
    }

    pub(crate) fn fire_auth_success(&self) {
        if let Some(reaction) = self.on_success.borrow().as_ref() {
            reaction();
        }
    }

    pub(crate) fn fire_auth_error(&self) {
        if let Some(reaction) = self.on_error.borrow().as_ref() {
            reaction();
        }
    }

    pub(crate) fn init_calls(&self) -> usize {
        self.init_calls.get()
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.login_calls.get()
    }

    pub(crate) fn logout_calls(&self) -> usize {
        self.logout_calls.get()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn init(&self, on_load: OnLoad) -> Result<bool, SessionError> {
        assert_eq!(on_load, OnLoad::CheckSso);
        self.init_calls.set(self.init_calls.get() + 1);
        self.init_result.borrow().clone()
    }

    fn login(&self) -> Result<(), SessionError> {
        self.login_calls.set(self.login_calls.get() + 1);
        Ok(())
    }

    fn logout(&self) -> Result<(), SessionError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn set_on_auth_success(&self, reaction: Reaction) {
        *self.on_success.borrow_mut() = Some(reaction);
    }

    fn set_on_auth_error(&self, reaction: Reaction) {
        *self.on_error.borrow_mut() = Some(reaction);
    }
}

pub(crate) struct FakeAccounts {
    current: RefCell<ApiResult<Account>>,
    demo: RefCell<ApiResult<Account>>,
    current_tokens: RefCell<Vec<String>>,
    demo_calls: Cell<usize>,
}

impl Default for FakeAccounts {
    fn default() -> Self {
        Self {
            current: RefCell::new(Err(ApiError::status("accounts/current", 404))),
            demo: RefCell::new(Err(ApiError::status("accounts/demo", 500))),
            current_tokens: RefCell::new(Vec::new()),
            demo_calls: Cell::new(0),
        }
    }
}

impl FakeAccounts {
    pub(crate) fn respond_current(&self, result: ApiResult<Account>) {
        *self.current.borrow_mut() = result;
    }

    pub(crate) fn respond_demo(&self, result: ApiResult<Account>) {
        *self.demo.borrow_mut() = result;
    }

    pub(crate) fn current_tokens(&self) -> Vec<String> {
        self.current_tokens.borrow().clone()
    }

    pub(crate) fn demo_calls(&self) -> usize {
        self.demo_calls.get()
    }
}

#[async_trait(?Send)]
impl AccountSource for FakeAccounts {
    async fn current_account(&self, token: &BearerToken) -> ApiResult<Account> {
        self.current_tokens
            .borrow_mut()
            .push(token.as_str().to_string());
        self.current.borrow().clone()
    }

    async fn demo_account(&self) -> ApiResult<Account> {
        self.demo_calls.set(self.demo_calls.get() + 1);
        self.demo.borrow().clone()
    }
}

pub(crate) struct FakeRates {
    response: RefCell<ApiResult<ExchangeRates>>,
    calls: Cell<usize>,
}

impl Default for FakeRates {
    fn default() -> Self {
        Self {
            response: RefCell::new(Err(ApiError::transport("rates", "no response"))),
            calls: Cell::new(0),
        }
    }
}

impl FakeRates {
    pub(crate) fn respond(&self, result: ApiResult<ExchangeRates>) {
        *self.response.borrow_mut() = result;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl RateSource for FakeRates {
    async fn latest_rates(&self) -> ApiResult<ExchangeRates> {
        self.calls.set(self.calls.get() + 1);
        self.response.borrow().clone()
    }
}

struct PendingTimer {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Scheduler on a virtual clock: deferred tasks and sleeps only fire when
/// the test advances time.
pub(crate) struct FakeScheduler {
    spawner: LocalSpawner,
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<PendingTimer>>,
    requested: RefCell<Vec<Duration>>,
}

impl FakeScheduler {
    fn new(spawner: LocalSpawner) -> Self {
        Self {
            spawner,
            now: Cell::new(Duration::ZERO),
            next_seq: Cell::new(0),
            pending: RefCell::new(Vec::new()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn now(&self) -> Duration {
        self.now.get()
    }

    /// Delays of every `defer` and `sleep` call so far, in call order.
    pub(crate) fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Moves the clock forward, firing due timers in deadline order.
    fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let position = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.seq))
                    .map(|(index, _)| index);
                position.map(|index| pending.remove(index))
            };
            let Some(timer) = next else {
                break;
            };
            self.now.set(timer.due);
            (timer.task)();
        }
        self.now.set(target);
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(PendingTimer {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}

impl Scheduler for FakeScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("local pool accepts tasks");
    }

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.requested.borrow_mut().push(delay);
        self.schedule(delay, task);
    }

    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        self.requested.borrow_mut().push(delay);
        let (tx, rx) = oneshot::channel::<()>();
        self.schedule(
            delay,
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        Box::pin(async move {
            let _ = rx.await;
        })
    }
}

/// A complete [`AppContext`] wired to fakes, plus the pool that runs it.
pub(crate) struct Harness {
    pool: LocalPool,
    pub(crate) ctx: AppContext,
    pub(crate) identity: Rc<FakeIdentity>,
    pub(crate) accounts: Rc<FakeAccounts>,
    pub(crate) rates: Rc<FakeRates>,
    pub(crate) ui: Rc<FakeUi>,
    pub(crate) scheduler: Rc<FakeScheduler>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let pool = LocalPool::new();
        let identity = Rc::new(FakeIdentity::default());
        let accounts = Rc::new(FakeAccounts::default());
        let rates = Rc::new(FakeRates::default());
        let ui = Rc::new(FakeUi::default());
        let scheduler = Rc::new(FakeScheduler::new(pool.spawner()));
        let ctx = AppContext {
            config: Rc::new(FrontendConfig::default()),
            display: Rc::new(RefCell::new(DisplayState::default())),
            identity: identity.clone(),
            accounts: accounts.clone(),
            rates: rates.clone(),
            ui: ui.clone(),
            scheduler: scheduler.clone(),
        };
        Self {
            pool,
            ctx,
            identity,
            accounts,
            rates,
            ui,
            scheduler,
        }
    }

    /// Drives `future` and every spawned task until `future` completes or
    /// everything is waiting on the clock.
    pub(crate) fn run<F>(&mut self, future: F) -> Option<F::Output>
    where
        F: Future + 'static,
        F::Output: 'static,
    {
        let output = Rc::new(RefCell::new(None));
        let slot = output.clone();
        self.pool
            .spawner()
            .spawn_local(async move {
                *slot.borrow_mut() = Some(future.await);
            })
            .expect("local pool accepts tasks");
        self.pool.run_until_stalled();
        output.borrow_mut().take()
    }

    pub(crate) fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    pub(crate) fn advance(&mut self, millis: u64) {
        self.scheduler.advance(Duration::from_millis(millis));
        self.pool.run_until_stalled();
    }

    pub(crate) fn view(&self) -> LandingView {
        self.ui.view()
    }
}
