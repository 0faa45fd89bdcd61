/// Builds a problem definition in OR-library text format.
#[derive(Default)]
pub struct OrlibBuilder {
    weights: Vec<i64>,
    constraints: Vec<Vec<usize>>,
}

impl OrlibBuilder {
    pub fn set_weights(&mut self, weights: &[i64]) -> &mut Self {
        self.weights = weights.to_vec();
        self
    }

    /// Adds a constraint consumed by given 1-based items.
    pub fn add_constraint(&mut self, items: &[usize]) -> &mut Self {
        self.constraints.push(items.to_vec());
        self
    }

    pub fn build(&self) -> String {
        let mut data = String::new();

        data.push_str(format!("{} {}\n", self.constraints.len(), self.weights.len()).as_str());
        data.push_str(format!("{}\n", join(self.weights.as_slice())).as_str());
        self.constraints.iter().for_each(|items| {
            data.push_str(format!("{}\n{}\n", items.len(), join(items.as_slice())).as_str());
        });

        data
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ")
}
