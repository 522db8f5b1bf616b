mod make_optimal_triangle;

pub use make_optimal_triangle::MakeOptimalTriangle;
