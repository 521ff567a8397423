pub mod d410_yard_heatmap;
