mod assistant;

pub use assistant::AssistantView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
