//! Compiled-in reference geometry.
//!
//! These tables describe the reference detector before any configuration
//! file has been loaded. A loaded `l3transform.config` replaces them.

/// Number of pad rows in the reference detector.
pub const ROW_COUNT: usize = 159;

/// Number of inner-region pad rows in the reference detector.
pub const INNER_ROW_COUNT: usize = 63;

/// Number of readout patches.
pub const PATCH_COUNT: usize = 6;

/// First and last slice row of each readout patch (inclusive).
pub const PATCH_ROWS: [(usize, usize); PATCH_COUNT] = [
    (0, 29),
    (30, 62),
    (63, 90),
    (91, 116),
    (117, 139),
    (140, 158),
];

/// Radial position (cm) of every slice row.
#[rustfmt::skip]
pub const ROW_RADIUS: [f64; ROW_COUNT] = [
    85.194999694824219, 85.944999694824219, 86.694999694824219, 87.444999694824219,
    88.194999694824219, 88.944999694824219, 89.694999694824219, 90.444999694824219,
    91.194999694824219, 91.944999694824219, 92.694999694824219, 93.444999694824219,
    94.194999694824219, 94.944999694824219, 95.694999694824219, 96.444999694824219,
    97.194999694824219, 97.944999694824219, 98.694999694824219, 99.444999694824219,
    100.194999694824219, 100.944999694824219, 101.694999694824219, 102.444999694824219,
    103.194999694824219, 103.944999694824219, 104.694999694824219, 105.444999694824219,
    106.194999694824219, 106.944999694824219, 107.694999694824219, 108.444999694824219,
    109.194999694824219, 109.944999694824219, 110.694999694824219, 111.444999694824219,
    112.194999694824219, 112.944999694824219, 113.694999694824219, 114.444999694824219,
    115.194999694824219, 115.944999694824219, 116.694999694824219, 117.444999694824219,
    118.194999694824219, 118.944999694824219, 119.694999694824219, 120.444999694824219,
    121.194999694824219, 121.944999694824219, 122.694999694824219, 123.444999694824219,
    124.194999694824219, 124.944999694824219, 125.694999694824219, 126.444999694824219,
    127.194999694824219, 127.944999694824219, 128.695007324218750, 129.445007324218750,
    130.195007324218750, 130.945007324218750, 131.695007324218750, 135.180007934570312,
    136.180007934570312, 137.180007934570312, 138.180007934570312, 139.180007934570312,
    140.180007934570312, 141.180007934570312, 142.180007934570312, 143.180007934570312,
    144.180007934570312, 145.180007934570312, 146.180007934570312, 147.180007934570312,
    148.180007934570312, 149.180007934570312, 150.180007934570312, 151.180007934570312,
    152.180007934570312, 153.180007934570312, 154.180007934570312, 155.180007934570312,
    156.180007934570312, 157.180007934570312, 158.180007934570312, 159.180007934570312,
    160.180007934570312, 161.180007934570312, 162.180007934570312, 163.180007934570312,
    164.180007934570312, 165.180007934570312, 166.180007934570312, 167.180007934570312,
    168.180007934570312, 169.180007934570312, 170.180007934570312, 171.180007934570312,
    172.180007934570312, 173.180007934570312, 174.180007934570312, 175.180007934570312,
    176.180007934570312, 177.180007934570312, 178.180007934570312, 179.180007934570312,
    180.180007934570312, 181.180007934570312, 182.180007934570312, 183.180007934570312,
    184.180007934570312, 185.180007934570312, 186.180007934570312, 187.180007934570312,
    188.180007934570312, 189.180007934570312, 190.180007934570312, 191.180007934570312,
    192.180007934570312, 193.180007934570312, 194.180007934570312, 195.180007934570312,
    196.180007934570312, 197.180007934570312, 198.180007934570312, 199.430007934570312,
    200.930007934570312, 202.430007934570312, 203.930007934570312, 205.430007934570312,
    206.930007934570312, 208.430007934570312, 209.930007934570312, 211.430007934570312,
    212.930007934570312, 214.430007934570312, 215.930007934570312, 217.430007934570312,
    218.930007934570312, 220.430007934570312, 221.930007934570312, 223.430007934570312,
    224.930007934570312, 226.430007934570312, 227.930007934570312, 229.430007934570312,
    230.930007934570312, 232.430007934570312, 233.930007934570312, 235.430007934570312,
    236.930007934570312, 238.430007934570312, 239.930007934570312, 241.430007934570312,
    242.930007934570312, 244.430007934570312, 245.930007934570312,
];

/// Number of pads in every slice row.
#[rustfmt::skip]
pub const PADS_PER_ROW: [usize; ROW_COUNT] = [
    67, 67, 69, 69, 69, 71, 71, 71, 73, 73, 73, 75, 75, 75, 77, 77,
    77, 79, 79, 79, 81, 81, 81, 83, 83, 83, 85, 85, 85, 87, 87, 87,
    89, 89, 89, 91, 91, 91, 93, 93, 93, 95, 95, 95, 97, 97, 97, 99,
    99, 99, 99, 101, 101, 101, 103, 103, 103, 105, 105, 105, 107, 107, 107, 73,
    75, 75, 75, 75, 77, 77, 77, 79, 79, 79, 81, 81, 81, 81, 83, 83,
    83, 85, 85, 85, 85, 87, 87, 87, 89, 89, 89, 91, 91, 91, 91, 93,
    93, 93, 95, 95, 95, 95, 97, 97, 97, 99, 99, 99, 101, 101, 101, 101,
    103, 103, 103, 105, 105, 105, 105, 107, 107, 107, 109, 109, 109, 111, 111, 111,
    113, 113, 113, 115, 115, 117, 117, 119, 119, 121, 121, 121, 123, 123, 125, 125,
    127, 127, 127, 129, 129, 131, 131, 133, 133, 135, 135, 135, 137, 137, 139,
];
