mod ball_ball_toi;
mod closest_points_random;
mod conservative_advancement;
mod cuboid_penetration;
mod minkowski_sum_margin;
mod near_contact;
mod voronoi_simplex;
