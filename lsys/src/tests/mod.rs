

// Engine tests
mod engine;

mod serializers;
