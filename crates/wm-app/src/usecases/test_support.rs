//! In-memory port fakes shared by the use-case unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context as LayerContext, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wm_core::ports::{ClockPort, MenuRepositoryPort, RecipeRepositoryPort, RepositoryError};
use wm_core::{Menu, Recipe, RecipeDraft};

#[derive(Default)]
pub(crate) struct InMemoryRecipeRepo {
    recipes: Mutex<Vec<Recipe>>,
    calls: Mutex<Vec<String>>,
    fail_fetch: AtomicBool,
    /// Number of updates allowed to succeed before the next one fails.
    fail_updates_after: Mutex<Option<usize>>,
    updates_done: AtomicUsize,
}

impl InMemoryRecipeRepo {
    pub(crate) fn seeded(names: &[&str]) -> Self {
        let repo = Self::default();
        {
            let mut recipes = repo.recipes.lock().unwrap();
            for name in names {
                recipes.push(Recipe::create(RecipeDraft::named(*name)).unwrap());
            }
        }
        repo
    }

    pub(crate) fn snapshot(&self) -> Vec<Recipe> {
        self.recipes.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn fail_fetch(&self) {
        self.fail_fetch.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_updates_after(&self, n: usize) {
        *self.fail_updates_after.lock().unwrap() = Some(n);
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RecipeRepositoryPort for InMemoryRecipeRepo {
    async fn add(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        self.record(format!("add:{}", recipe.name));
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        self.record(format!("update:{}", recipe.id));
        if let Some(limit) = *self.fail_updates_after.lock().unwrap() {
            if self.updates_done.load(Ordering::SeqCst) >= limit {
                return Err(RepositoryError::Storage("update rejected".into()));
            }
        }
        let mut recipes = self.recipes.lock().unwrap();
        let slot = recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or_else(|| RepositoryError::NotFound(recipe.id.to_string()))?;
        *slot = recipe.clone();
        self.updates_done.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        self.record(format!("delete:{}", recipe.id));
        self.recipes.lock().unwrap().retain(|r| r.id != recipe.id);
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, RepositoryError> {
        self.record("fetch_all".to_string());
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("fetch rejected".into()));
        }
        let mut recipes = self.recipes.lock().unwrap().clone();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(recipes)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryMenuRepo {
    menus: Mutex<Vec<Menu>>,
    fail_add: AtomicBool,
}

impl InMemoryMenuRepo {
    pub(crate) fn snapshot(&self) -> Vec<Menu> {
        self.menus.lock().unwrap().clone()
    }

    pub(crate) fn fail_add(&self) {
        self.fail_add.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MenuRepositoryPort for InMemoryMenuRepo {
    async fn add(&self, menu: &Menu) -> Result<(), RepositoryError> {
        if self.fail_add.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("menu add rejected".into()));
        }
        self.menus.lock().unwrap().push(menu.clone());
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Menu>, RepositoryError> {
        let mut menus = self.menus.lock().unwrap().clone();
        // latest insert first among equal timestamps
        menus.reverse();
        menus.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        Ok(menus)
    }

    async fn delete(&self, menu: &Menu) -> Result<(), RepositoryError> {
        self.menus.lock().unwrap().retain(|m| m.id != menu.id);
        Ok(())
    }
}

pub(crate) struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Layer recording span names and event messages for tracing assertions.
#[derive(Clone, Default)]
pub(crate) struct TraceRecorder {
    spans: Arc<Mutex<Vec<String>>>,
    messages: Arc<Mutex<Vec<String>>>,
}

impl TraceRecorder {
    /// Route the current thread's tracing output to this recorder until the
    /// guard is dropped.
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing_subscriber::registry().with(self.clone()).set_default()
    }

    pub(crate) fn spans(&self) -> Vec<String> {
        self.spans.lock().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct MessageVisitor<'a>(&'a mut Option<String>);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for TraceRecorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: LayerContext<'_, S>) {
        self.spans
            .lock()
            .unwrap()
            .push(attrs.metadata().name().to_string());
    }

    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        let mut message = None;
        event.record(&mut MessageVisitor(&mut message));
        if let Some(message) = message {
            self.messages.lock().unwrap().push(message);
        }
    }
}
