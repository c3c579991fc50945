pub mod india_utilities;
