pub mod assigner;
pub mod cluster;
pub mod engine;
pub mod seeder;

pub use assigner::Assigner;
pub use cluster::{Cluster, ClusterSummary};
pub use engine::{ClusteringEngine, ClusteringResult};
pub use seeder::CentroidSeeder;
