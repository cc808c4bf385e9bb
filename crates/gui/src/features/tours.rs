use shared::{TourData, TourStep, ToursData};

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Guided tours: ordered steps, each pointing at a snapshot state
#[derive(Debug, Clone)]
pub struct Tours {
    ins: PropertySet,
    tours: Vec<TourData>,
}

impl Tours {
    pub const ENABLED: &'static str = "Enabled";
    pub const TOUR_INDEX: &'static str = "TourIndex";
    pub const STEP_INDEX: &'static str = "StepIndex";
    pub const NEXT: &'static str = "Next";
    pub const PREVIOUS: &'static str = "Previous";
    pub const FIRST: &'static str = "First";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::ENABLED, false),
                Property::number(Self::TOUR_INDEX, -1.0),
                Property::number(Self::STEP_INDEX, 0.0),
                Property::event(Self::NEXT),
                Property::event(Self::PREVIOUS),
                Property::event(Self::FIRST),
            ]),
            tours: Vec::new(),
        }
    }

    pub fn tours(&self) -> &[TourData] {
        &self.tours
    }

    pub fn add_tour(&mut self, tour: TourData) -> usize {
        self.tours.push(tour);
        self.tours.len() - 1
    }

    /// Index of the active tour, if any
    pub fn active_tour(&self) -> Option<usize> {
        let index = self.ins.number(Self::TOUR_INDEX);
        (index >= 0.0 && (index as usize) < self.tours.len()).then_some(index as usize)
    }

    pub fn step_index(&self) -> usize {
        self.ins.number(Self::STEP_INDEX).max(0.0) as usize
    }

    pub fn current_step(&self) -> Option<&TourStep> {
        let tour = self.tours.get(self.active_tour()?)?;
        tour.steps.get(self.step_index())
    }

    /// Activate a tour at its first step; `None` deactivates
    pub fn start(&mut self, tour: Option<usize>) -> Result<(), PropertyError> {
        let index = match tour {
            Some(index) if index < self.tours.len() => index as f64,
            _ => -1.0,
        };
        self.ins.set(Self::ENABLED, PropertyValue::Boolean(index >= 0.0))?;
        self.ins.set(Self::TOUR_INDEX, PropertyValue::Number(index))?;
        self.goto_step(0, Self::FIRST)
    }

    pub fn next(&mut self) -> Result<(), PropertyError> {
        let step = self.step_index() + 1;
        self.goto_step(step, Self::NEXT)
    }

    pub fn previous(&mut self) -> Result<(), PropertyError> {
        let step = self.step_index().saturating_sub(1);
        self.goto_step(step, Self::PREVIOUS)
    }

    pub fn first(&mut self) -> Result<(), PropertyError> {
        self.goto_step(0, Self::FIRST)
    }

    fn goto_step(&mut self, step: usize, event: &str) -> Result<(), PropertyError> {
        let count = self
            .active_tour()
            .map_or(0, |index| self.tours[index].steps.len());
        let step = step.min(count.saturating_sub(1));
        self.ins.set(Self::STEP_INDEX, PropertyValue::Number(step as f64))?;
        if let Some(property) = self.ins.get_mut(event) {
            property.fire();
        }
        Ok(())
    }
}

impl Default for Tours {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Tours {
    fn type_name(&self) -> &'static str {
        "Tours"
    }

    fn display_name(&self) -> &'static str {
        "Tours"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Tours {
    type Data = ToursData;

    fn to_data(&self) -> Option<ToursData> {
        (!self.tours.is_empty()).then(|| self.tours.clone())
    }

    fn from_data(&mut self, data: &ToursData) -> Result<(), PropertyError> {
        self.tours = data.clone();
        self.ins.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step_tour() -> TourData {
        TourData {
            title: "Highlights".to_string(),
            lead: String::new(),
            tags: Vec::new(),
            steps: vec![
                TourStep {
                    id: "s1".to_string(),
                    title: "Front".to_string(),
                },
                TourStep {
                    id: "s2".to_string(),
                    title: "Back".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_no_tours_no_data() {
        let mut tours = Tours::new();
        tours.start(None).unwrap();
        assert!(tours.to_data().is_none());
    }

    #[test]
    fn test_step_navigation_clamps() {
        let mut tours = Tours::new();
        tours.add_tour(two_step_tour());
        tours.start(Some(0)).unwrap();
        assert_eq!(tours.current_step().unwrap().id, "s1");

        tours.next().unwrap();
        tours.next().unwrap();
        assert_eq!(tours.current_step().unwrap().id, "s2");

        tours.previous().unwrap();
        tours.previous().unwrap();
        assert_eq!(tours.current_step().unwrap().id, "s1");

        tours.next().unwrap();
        tours.first().unwrap();
        assert_eq!(tours.step_index(), 0);
        assert_eq!(tours.ins().number(Tours::FIRST), 2.0);
    }

    #[test]
    fn test_inactive_tour_has_no_step() {
        let mut tours = Tours::new();
        tours.add_tour(two_step_tour());
        assert!(tours.current_step().is_none());
        tours.start(Some(7)).unwrap();
        assert!(tours.active_tour().is_none());
        assert!(!tours.ins().boolean(Tours::ENABLED));
    }

    #[test]
    fn test_from_data_resets_navigation() {
        let mut tours = Tours::new();
        tours.add_tour(two_step_tour());
        tours.start(Some(0)).unwrap();
        tours.next().unwrap();

        let data = tours.to_data().unwrap();
        let mut other = Tours::new();
        other.from_data(&data).unwrap();
        assert_eq!(other.tours().len(), 1);
        assert!(other.active_tour().is_none());
        assert_eq!(other.step_index(), 0);
    }
}
