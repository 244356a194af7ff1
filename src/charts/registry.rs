use std::collections::HashMap;

use super::ChartSlot;

/// Anything holding a live chart that must be torn down before reuse
pub trait Disposable {
    fn dispose(&self);
}

/// Live chart instances per slot; a new chart replaces (and disposes) the old
#[derive(Debug)]
pub struct ChartRegistry<H: Disposable> {
    charts: HashMap<ChartSlot, H>,
}

impl<H: Disposable> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }
}

impl<H: Disposable> ChartRegistry<H> {
    pub fn replace(&mut self, slot: ChartSlot, chart: H) {
        if let Some(previous) = self.charts.insert(slot, chart) {
            previous.dispose();
        }
    }

    pub fn dispose(&mut self, slot: ChartSlot) {
        if let Some(chart) = self.charts.remove(&slot) {
            chart.dispose();
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, chart) in self.charts.drain() {
            chart.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeChart {
        id: u32,
        disposed: Rc<RefCell<Vec<u32>>>,
    }

    impl Disposable for FakeChart {
        fn dispose(&self) {
            self.disposed.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_replace_disposes_previous_chart() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ChartRegistry::default();
        registry.replace(ChartSlot::PlanMacro, FakeChart { id: 1, disposed: disposed.clone() });
        registry.replace(ChartSlot::PlanMacro, FakeChart { id: 2, disposed: disposed.clone() });
        registry.replace(ChartSlot::Macro, FakeChart { id: 3, disposed: disposed.clone() });

        assert_eq!(*disposed.borrow(), vec![1]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_dispose_all_empties_registry() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ChartRegistry::default();
        registry.replace(ChartSlot::CalorieTrend, FakeChart { id: 7, disposed: disposed.clone() });
        registry.dispose(ChartSlot::Macro);
        assert_eq!(registry.len(), 1);

        registry.dispose_all();
        assert_eq!(registry.len(), 0);
        assert_eq!(*disposed.borrow(), vec![7]);
    }
}
