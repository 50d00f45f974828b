pub mod sector_pipeline;

pub use sector_pipeline::SectorPipeline;
