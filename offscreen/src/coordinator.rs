use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::key::{ContainerKey, ItemMap};
use crate::measure::{GeometrySource, PendingMeasurement};
use crate::resolver::{GroupPlan, below_threshold_placeholders, resolve};
use crate::{
    Error, Geometry, Group, GroupLayout, GroupRegistry, Item, ItemId, Lifecycle, MountState,
    OnLayoutCallback, PlaceholderOptions, Registration, ScrollHost, UpdateScheduler, UpdateToken,
    Viewport, Window,
};

/// Why a cycle finished without computing toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// No group has reached the virtualization threshold.
    NotVirtualized,
    /// The scroll position matches the last rendered one.
    Unchanged,
}

/// Number of callbacks an applied plan invoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyReport {
    pub mounted: usize,
    pub unmounted: usize,
}

impl ApplyReport {
    pub fn total(&self) -> usize {
        self.mounted + self.unmounted
    }
}

/// Result of a cycle or of applying a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Skipped(SkipReason),
    Applied(ApplyReport),
    /// The plan waits for [`Coordinator::on_animation_frame`].
    Deferred(UpdateToken),
    /// A newer compute pass superseded the plan; nothing was changed.
    Stale(UpdateToken),
}

/// A computed, not yet applied, set of toggles.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePlan<C> {
    token: UpdateToken,
    viewport: Viewport,
    window: Window,
    groups: Vec<GroupPlan<C>>,
}

impl<C> UpdatePlan<C> {
    pub fn token(&self) -> UpdateToken {
        self.token
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn groups(&self) -> &[GroupPlan<C>] {
        &self.groups
    }

    pub fn toggle_count(&self) -> usize {
        self.groups.iter().map(|g| g.toggles.len()).sum()
    }
}

enum Prepared<C> {
    Skip(SkipReason),
    Plan(UpdatePlan<C>),
}

/// Decides which list items are mounted and which are replaced by placeholders.
///
/// One coordinator serves one scroll container; independent lists inside it are told apart by
/// their container key `C`. The coordinator owns no UI objects: the host `H` reports geometry and
/// manages event subscriptions, and each item's [`Lifecycle`] performs the real content work.
///
/// Everything runs on the caller's thread. Adapters drive it by calling:
/// - `register_element` / `unregister_element` as items enter and leave the data set
/// - `on_scroll` / `on_resize` from the host's event listeners
/// - `tick(now_ms)` from a timer or frame loop (debounced cycles, deferred measurement)
/// - `on_animation_frame` from the display-sync callback when applies are deferred
pub struct Coordinator<C, H> {
    options: PlaceholderOptions,
    host: H,
    registry: GroupRegistry<C>,
    items: ItemMap<Item<C>>,
    pending: Vec<PendingMeasurement<C>>,
    next_id: u64,
    last_rendered_scroll_top: Option<f64>,
    scheduler: UpdateScheduler,
    deferred: Option<UpdatePlan<C>>,
    listening: bool,
    on_layout: Option<OnLayoutCallback<C>>,
}

impl<C: ContainerKey, H: ScrollHost<C>> Coordinator<C, H> {
    pub fn new(options: PlaceholderOptions, host: H) -> Self {
        odebug!(
            top_offset = options.top_offset,
            bottom_offset = options.bottom_offset,
            threshold = options.minimum_items_threshold,
            "Coordinator::new"
        );
        Self {
            options,
            host,
            registry: GroupRegistry::new(),
            items: ItemMap::default(),
            pending: Vec::new(),
            next_id: 1,
            last_rendered_scroll_top: None,
            scheduler: UpdateScheduler::new(),
            deferred: None,
            listening: false,
            on_layout: None,
        }
    }

    pub fn options(&self) -> &PlaceholderOptions {
        &self.options
    }

    /// Replaces the options; the next cycle recomputes from scratch.
    pub fn set_options(&mut self, options: PlaceholderOptions) {
        self.options = options;
        self.last_rendered_scroll_top = None;
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Sets the observer told about each container's reserved space.
    pub fn set_on_layout(
        &mut self,
        on_layout: Option<impl Fn(&C, GroupLayout) + Send + Sync + 'static>,
    ) {
        self.on_layout = on_layout.map(|f| Arc::new(f) as _);
    }

    pub fn item(&self, id: ItemId) -> Option<&Item<C>> {
        self.items.get(&id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_registered(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Returns `true` while `id` waits for its geometry.
    pub fn is_measuring(&self, id: ItemId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn group(&self, container: &C) -> Option<&Group<C>> {
        self.registry.get_if_exists(container)
    }

    pub fn groups(&self) -> &GroupRegistry<C> {
        &self.registry
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn last_rendered_scroll_top(&self) -> Option<f64> {
        self.last_rendered_scroll_top
    }

    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    /// Returns the token of the plan waiting for the next display-sync callback.
    pub fn deferred_token(&self) -> Option<UpdateToken> {
        self.deferred.as_ref().map(|p| p.token)
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn notify_layout(&self, container: &C, layout: GroupLayout) {
        if let Some(cb) = &self.on_layout {
            cb(container, layout);
        }
    }

    fn attach(&mut self) {
        if self.listening {
            return;
        }
        odebug!("attach_listeners");
        self.host.attach_listeners();
        self.listening = true;
    }

    fn detach(&mut self) {
        if !self.listening {
            return;
        }
        odebug!("detach_listeners");
        self.host.detach_listeners();
        self.listening = false;
        self.scheduler.cancel_pending();
        // Invalidate any plan still held by the host.
        self.scheduler.stamp();
        self.deferred = None;
        self.last_rendered_scroll_top = None;
    }

    /// Forgets the last rendered scroll position and schedules a cycle after
    /// `registration_delay_ms`.
    pub fn force_invalidate(&mut self, now_ms: u64) {
        self.last_rendered_scroll_top = None;
        self.scheduler
            .request_forced(now_ms, self.options.registration_delay_ms);
    }

    /// Starts tracking an item.
    ///
    /// An item with eager geometry joins its group immediately; one with a
    /// [`crate::GeometryProvider`] joins once `tick` manages to measure it. When the group is
    /// still below the virtualization threshold the item is mounted right away.
    ///
    /// On [`Error::Mount`] the item stays registered as a placeholder under the id carried by the
    /// error.
    pub fn register_element(
        &mut self,
        registration: Registration<C>,
        now_ms: u64,
    ) -> Result<ItemId, Error> {
        let id = self.allocate_id();
        let Registration {
            container,
            source,
            lifecycle,
            state,
        } = registration;

        match source {
            GeometrySource::Eager(geometry) => {
                let mount_now = self.insert_item(id, container, geometry, lifecycle, state, now_ms);
                if mount_now {
                    self.mount_now(id)?;
                }
            }
            GeometrySource::Deferred(provider) => {
                otrace!(item = id.get(), "register_element: awaiting measurement");
                self.pending.push(PendingMeasurement {
                    id,
                    container,
                    provider,
                    lifecycle,
                    state,
                    due_ms: now_ms.saturating_add(self.options.measure_delay_ms),
                });
            }
        }
        Ok(id)
    }

    /// Group bookkeeping for a measured item. Returns `true` when the item must be mounted by the
    /// below-threshold rule.
    fn insert_item(
        &mut self,
        id: ItemId,
        container: C,
        geometry: Geometry,
        lifecycle: Box<dyn Lifecycle>,
        state: MountState,
        now_ms: u64,
    ) -> bool {
        let valid = geometry.is_valid();
        if !valid {
            owarn!(
                item = id.get(),
                inner_height = geometry.inner_height,
                height = geometry.height,
                "invalid geometry; item stays mounted"
            );
        }
        let height = if valid { geometry.height } else { 0.0 };
        let per_item = self.options.use_per_item_placeholder;

        let host = &self.host;
        let (group, created) = self
            .registry
            .get_or_create(&container, || host.container_origin(&container));
        let top_offset = group.push(id, height);
        let below_threshold = group.len() < self.options.minimum_items_threshold;
        let layout = group.layout(per_item);

        if created {
            odebug!(groups = self.registry.len(), "group created");
            if self.registry.len() == 1 {
                self.attach();
            }
        }

        otrace!(item = id.get(), top_offset, height, "register_element");
        self.notify_layout(&container, layout);
        self.items
            .insert(id, Item::new(container, geometry, top_offset, state, lifecycle));
        self.force_invalidate(now_ms);

        below_threshold && !state.is_mounted()
    }

    fn mount_now(&mut self, id: ItemId) -> Result<(), Error> {
        let Some(item) = self.items.get_mut(&id) else {
            return Ok(());
        };
        item.transition(id, MountState::Mounted).map(|_| ())
    }

    /// Stops tracking an item.
    ///
    /// Offsets of the items below it are not reflowed. Returns `false` for unknown ids.
    pub fn unregister_element(&mut self, id: ItemId) -> bool {
        if let Some(index) = self.pending.iter().position(|p| p.id == id) {
            self.pending.remove(index);
            otrace!(item = id.get(), "unregister_element: measurement cancelled");
            return true;
        }

        let Some(item) = self.items.remove(&id) else {
            return false;
        };
        let height = item.height();
        let container = item.into_container();

        let Some(group) = self.registry.get_mut(&container) else {
            debug_assert!(false, "unregister_element: item {id} without a group");
            return true;
        };
        group.remove(id, height);
        otrace!(item = id.get(), remaining = group.len(), "unregister_element");

        if group.is_empty() {
            self.registry.remove(&container);
            odebug!(groups = self.registry.len(), "group removed");
            if self.registry.is_empty() {
                self.detach();
            }
        } else {
            let layout = group.layout(self.options.use_per_item_placeholder);
            self.notify_layout(&container, layout);
        }
        true
    }

    /// Handles a scroll event from the host.
    ///
    /// With `scroll_settle_delay_ms == 0` the cycle runs synchronously; otherwise one cycle is
    /// scheduled for `tick`. Ignored while no listeners are attached.
    pub fn on_scroll(&mut self, now_ms: u64) -> Result<Option<UpdateOutcome>, Error> {
        if !self.listening {
            return Ok(None);
        }
        let delay = self.options.scroll_settle_delay_ms;
        if delay == 0 {
            return self.run_update_cycle().map(Some);
        }
        self.scheduler.request_update(now_ms, delay);
        Ok(None)
    }

    /// Handles a resize event: the window may change even with an unchanged scroll position.
    pub fn on_resize(&mut self) -> Result<Option<UpdateOutcome>, Error> {
        if !self.listening {
            return Ok(None);
        }
        self.last_rendered_scroll_top = None;
        self.run_update_cycle().map(Some)
    }

    /// Advances time: measures due items and runs the scheduled cycle if it is due.
    pub fn tick(&mut self, now_ms: u64) -> Result<Option<UpdateOutcome>, Error> {
        self.process_measurements(now_ms)?;
        if self.scheduler.poll(now_ms) {
            return self.run_update_cycle().map(Some);
        }
        Ok(None)
    }

    fn process_measurements(&mut self, now_ms: u64) -> Result<(), Error> {
        let retry = self.options.measure_delay_ms;
        let mut ready = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            let pending = &mut self.pending[i];
            if now_ms < pending.due_ms {
                i += 1;
                continue;
            }
            match pending.provider.measure() {
                Some(geometry) => ready.push((self.pending.remove(i), geometry)),
                None => {
                    pending.due_ms = now_ms.saturating_add(retry);
                    i += 1;
                }
            }
        }

        let mut mount = Vec::new();
        for (pending, geometry) in ready {
            let PendingMeasurement {
                id,
                container,
                lifecycle,
                state,
                ..
            } = pending;
            if self.insert_item(id, container, geometry, lifecycle, state, now_ms) {
                mount.push(id);
            }
        }
        for id in mount {
            self.mount_now(id)?;
        }
        Ok(())
    }

    /// Runs a full cycle now, cancelling any scheduled one.
    ///
    /// With `defer_apply_to_frame` the computed plan is held for
    /// [`Coordinator::on_animation_frame`], replacing (and making stale) any earlier one.
    pub fn run_update_cycle(&mut self) -> Result<UpdateOutcome, Error> {
        self.scheduler.cancel_pending();
        match self.prepare()? {
            Prepared::Skip(reason) => Ok(UpdateOutcome::Skipped(reason)),
            Prepared::Plan(plan) => {
                if self.options.defer_apply_to_frame {
                    let token = plan.token;
                    self.deferred = Some(plan);
                    Ok(UpdateOutcome::Deferred(token))
                } else {
                    self.apply_update(plan)
                }
            }
        }
    }

    /// Applies the plan held since the last deferred cycle, if any.
    pub fn on_animation_frame(&mut self) -> Result<Option<UpdateOutcome>, Error> {
        let Some(plan) = self.deferred.take() else {
            return Ok(None);
        };
        self.apply_update(plan).map(Some)
    }

    /// Computes a plan without applying it.
    ///
    /// Groups below the threshold are mounted first (that step invokes callbacks). Returns
    /// `None` when no group is virtualized or the scroll position is unchanged. The returned plan
    /// records the scroll position as rendered and makes earlier plans stale.
    pub fn compute_update(&mut self) -> Result<Option<UpdatePlan<C>>, Error> {
        match self.prepare()? {
            Prepared::Skip(_) => Ok(None),
            Prepared::Plan(plan) => Ok(Some(plan)),
        }
    }

    fn prepare(&mut self) -> Result<Prepared<C>, Error> {
        self.mount_below_threshold()?;

        let threshold = self.options.minimum_items_threshold;
        if !self.registry.iter().any(|g| g.len() >= threshold) {
            otrace!("cycle skipped: no group over threshold");
            return Ok(Prepared::Skip(SkipReason::NotVirtualized));
        }

        let viewport = Viewport::new(self.host.scroll_top(), self.host.viewport_height());
        if self.last_rendered_scroll_top == Some(viewport.scroll_top) {
            otrace!(scroll_top = viewport.scroll_top, "cycle skipped: unchanged");
            return Ok(Prepared::Skip(SkipReason::Unchanged));
        }

        let window = Window::new(viewport, self.options.top_offset, self.options.bottom_offset);
        let items = &self.items;
        let groups = resolve(window, threshold, self.registry.iter(), |id| items.get(&id));
        let token = self.scheduler.stamp();
        self.last_rendered_scroll_top = Some(viewport.scroll_top);

        otrace!(
            scroll_top = viewport.scroll_top,
            lower = window.lower,
            upper = window.upper,
            token = token.get(),
            "cycle computed"
        );
        Ok(Prepared::Plan(UpdatePlan {
            token,
            viewport,
            window,
            groups,
        }))
    }

    fn mount_below_threshold(&mut self) -> Result<(), Error> {
        let items = &self.items;
        let ids = below_threshold_placeholders(
            self.options.minimum_items_threshold,
            self.registry.iter(),
            |id| items.get(&id),
        );
        for id in ids {
            self.mount_now(id)?;
        }
        Ok(())
    }

    /// Applies a plan from [`Coordinator::compute_update`].
    ///
    /// Stale plans are discarded without touching any item. Toggles for items that were
    /// unregistered or already reached their target are skipped. The first failing callback
    /// aborts the rest of the plan and clears the rendered scroll position.
    pub fn apply_update(&mut self, plan: UpdatePlan<C>) -> Result<UpdateOutcome, Error> {
        if !self.scheduler.is_current(plan.token) {
            odebug!(token = plan.token.get(), "stale plan discarded");
            return Ok(UpdateOutcome::Stale(plan.token));
        }

        let per_item = self.options.use_per_item_placeholder;
        let mut report = ApplyReport::default();
        for group_plan in plan.groups {
            for toggle in &group_plan.toggles {
                let Some(item) = self.items.get_mut(&toggle.item) else {
                    continue;
                };
                match item.transition(toggle.item, toggle.target) {
                    Ok(true) => match toggle.target {
                        MountState::Mounted => report.mounted += 1,
                        MountState::Placeholder => report.unmounted += 1,
                    },
                    Ok(false) => {}
                    Err(err) => {
                        owarn!(item = toggle.item.get(), "lifecycle callback failed");
                        self.last_rendered_scroll_top = None;
                        return Err(err);
                    }
                }
            }

            let Some(group) = self.registry.get_mut(&group_plan.container) else {
                continue;
            };
            group.set_placeholder_height(group_plan.leading_placeholder_height);
            let layout = group.layout(per_item);
            self.notify_layout(&group_plan.container, layout);
        }

        otrace!(
            mounted = report.mounted,
            unmounted = report.unmounted,
            "plan applied"
        );
        Ok(UpdateOutcome::Applied(report))
    }
}

impl<C: fmt::Debug, H: fmt::Debug> fmt::Debug for Coordinator<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("options", &self.options)
            .field("host", &self.host)
            .field("registry", &self.registry)
            .field("items", &self.items.len())
            .field("pending", &self.pending.len())
            .field("last_rendered_scroll_top", &self.last_rendered_scroll_top)
            .field("scheduler", &self.scheduler)
            .field("listening", &self.listening)
            .finish_non_exhaustive()
    }
}
