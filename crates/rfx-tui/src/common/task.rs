use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    RfpLoad,
    VendorList,
    EmailGenerate,
    EmailSend,
    Reveal,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub rfp_load: TaskState,
    pub vendor_list: TaskState,
    pub email_generate: TaskState,
    pub email_send: TaskState,
    pub reveal: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::RfpLoad => &self.rfp_load,
            TaskKind::VendorList => &self.vendor_list,
            TaskKind::EmailGenerate => &self.email_generate,
            TaskKind::EmailSend => &self.email_send,
            TaskKind::Reveal => &self.reveal,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::RfpLoad => &mut self.rfp_load,
            TaskKind::VendorList => &mut self.vendor_list,
            TaskKind::EmailGenerate => &mut self.email_generate,
            TaskKind::EmailSend => &mut self.email_send,
            TaskKind::Reveal => &mut self.reveal,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.rfp_load.is_running()
            || self.vendor_list.is_running()
            || self.email_generate.is_running()
            || self.email_send.is_running()
            || self.reveal.is_running()
    }

    /// Cancels every live token. Used on teardown so no spawned task
    /// outlives the view.
    pub fn cancel_all(&mut self) {
        for kind in [
            TaskKind::RfpLoad,
            TaskKind::VendorList,
            TaskKind::EmailGenerate,
            TaskKind::EmailSend,
            TaskKind::Reveal,
        ] {
            let state = self.state_mut(kind);
            if let Some(cancel) = state.cancel.take() {
                cancel.cancel();
            }
            state.clear();
        }
    }
}
