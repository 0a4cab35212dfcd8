use gridpath::analysis::compare::Comparison;
use gridpath::{GridResult, GridSession, NodeId};

pub struct App {
    session: GridSession,
    comparison: Comparison,
    target: NodeId,
    step: usize,
}

fn cycle(ids: &[NodeId], current: NodeId) -> NodeId {
    match ids.iter().position(|id| *id == current) {
        Some(i) => ids[(i + 1) % ids.len()],
        None => ids.first().copied().unwrap_or(current),
    }
}

impl App {
    pub fn new(session: GridSession, source: NodeId, target: NodeId) -> GridResult<Self> {
        session.standard().node_by_id(target)?;
        let comparison = session.compare(source)?;
        Ok(Self {
            session,
            comparison,
            target,
            step: 0,
        })
    }

    pub fn session(&self) -> &GridSession {
        &self.session
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub fn source(&self) -> NodeId {
        self.comparison.source()
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Steps both traces together; the shorter one stays on its last step.
    pub fn next_step(&mut self) {
        let last = self
            .comparison
            .standard()
            .trace()
            .len()
            .max(self.comparison.power_aware().trace().len())
            .saturating_sub(1);
        self.step = (self.step + 1).min(last);
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    pub fn cycle_source(&mut self) -> GridResult<()> {
        let ids: Vec<NodeId> = self.session.standard().node_ids().collect();
        let source = cycle(&ids, self.source());
        self.recompute(source)
    }

    pub fn cycle_target(&mut self) {
        let ids: Vec<NodeId> = self.session.standard().node_ids().collect();
        self.target = cycle(&ids, self.target);
    }

    pub fn regenerate(&mut self) -> GridResult<()> {
        self.session.regenerate()?;
        self.recompute(self.source())
    }

    fn recompute(&mut self, source: NodeId) -> GridResult<()> {
        self.comparison = self.session.compare(source)?;
        self.step = 0;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
