use crate::shade::{ColorBand, CurveMap, CurveMapping, RampInterpolation};

/// Sample count used when baking ramps and curves.
pub const BAKE_RESOLUTION: usize = 256;

/// Sample positions `i / BAKE_RESOLUTION` for `i` in `0..BAKE_RESOLUTION`.
fn positions() -> impl Iterator<Item = f32> {
	(0..BAKE_RESOLUTION).map(|idx| idx as f32 / BAKE_RESOLUTION as f32)
}

impl ColorBand {
	/// Evaluate the ramp at `at`.
	///
	/// Spline modes are approximated with the ease curve between neighbouring stops.
	pub fn evaluate(&self, at: f32) -> [f32; 4] {
		let mut stops = self.stops.clone();
		stops.sort_by(|left, right| left.position.total_cmp(&right.position));

		let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
			return [0.0, 0.0, 0.0, 0.0];
		};
		if at <= first.position {
			return first.color;
		}
		if at >= last.position {
			return last.color;
		}

		let right = stops.iter().position(|stop| stop.position > at).unwrap_or(stops.len() - 1);
		let left = &stops[right.saturating_sub(1)];
		let right = &stops[right];

		if self.interpolation == RampInterpolation::Constant {
			return left.color;
		}

		let span = right.position - left.position;
		let mut fac = if span > 0.0 { (at - left.position) / span } else { 0.0 };
		if !matches!(self.interpolation, RampInterpolation::Linear) {
			fac = fac * fac * (3.0 - 2.0 * fac);
		}

		let mut out = [0.0; 4];
		for (channel, slot) in out.iter_mut().enumerate() {
			*slot = left.color[channel] + (right.color[channel] - left.color[channel]) * fac;
		}
		out
	}

	/// Bake the ramp into `(rgb, alpha)` arrays of [`BAKE_RESOLUTION`] samples.
	pub fn bake(&self) -> (Vec<[f32; 3]>, Vec<f32>) {
		positions()
			.map(|at| {
				let color = self.evaluate(at);
				([color[0], color[1], color[2]], color[3])
			})
			.unzip()
	}

	/// Whether the ramp interpolates smoothly rather than linearly.
	pub fn interpolates(&self) -> bool {
		self.interpolation != RampInterpolation::Linear
	}
}

impl CurveMap {
	/// Piecewise-linear evaluation with constant extrapolation; an empty curve is the identity.
	pub fn evaluate(&self, at: f32) -> f32 {
		let mut points = self.points.clone();
		points.sort_by(|left, right| left[0].total_cmp(&right[0]));

		let (Some(first), Some(last)) = (points.first(), points.last()) else {
			return at;
		};
		if at <= first[0] {
			return first[1];
		}
		if at >= last[0] {
			return last[1];
		}

		for pair in points.windows(2) {
			let (left, right) = (pair[0], pair[1]);
			if at <= right[0] {
				let span = right[0] - left[0];
				if span <= 0.0 {
					return right[1];
				}
				return left[1] + (right[1] - left[1]) * (at - left[0]) / span;
			}
		}
		last[1]
	}
}

impl CurveMapping {
	fn channel(&self, idx: usize, at: f32) -> f32 {
		self.curves.get(idx).map_or(at, |curve| curve.evaluate(at))
	}

	/// Evaluate X, Y and Z curves independently.
	pub fn evaluate_vector(&self, at: [f32; 3]) -> [f32; 3] {
		[self.channel(0, at[0]), self.channel(1, at[1]), self.channel(2, at[2])]
	}

	/// Apply the combined curve, then the per-channel curve.
	pub fn evaluate_rgb(&self, at: [f32; 3]) -> [f32; 3] {
		[
			self.channel(0, self.channel(3, at[0])),
			self.channel(1, self.channel(3, at[1])),
			self.channel(2, self.channel(3, at[2])),
		]
	}

	/// Bake vector curves over [`BAKE_RESOLUTION`] samples.
	pub fn bake_vector(&self) -> Vec<[f32; 3]> {
		positions().map(|at| self.evaluate_vector([at, at, at])).collect()
	}

	/// Bake RGB curves over [`BAKE_RESOLUTION`] samples.
	pub fn bake_rgb(&self) -> Vec<[f32; 3]> {
		positions().map(|at| self.evaluate_rgb([at, at, at])).collect()
	}
}
