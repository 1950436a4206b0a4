use ndarray::Array2;
use num_complex::Complex;

/// Amplitude/phase/validity decomposition of a complex interferogram
#[derive(Debug, Clone)]
pub struct ComplexDecomposition {
    pub amplitude: Array2<f32>,
    pub phase: Array2<f32>,
    /// 1 where the amplitude is a number, 0 where it is NaN
    pub mask: Array2<u8>,
}

/// Exact complex zeros mark missing data in interferogram products; map them
/// to NaN so they stay out of the plots and get flagged in the validity mask.
pub fn mask_zeros(data: &mut Array2<Complex<f32>>) {
    data.mapv_inplace(|v| {
        if v.re == 0.0 && v.im == 0.0 {
            Complex::new(f32::NAN, f32::NAN)
        } else {
            v
        }
    });
}

pub fn decompose(data: &Array2<Complex<f32>>) -> ComplexDecomposition {
    let amplitude = data.mapv(|v| v.norm());
    let phase = data.mapv(|v| v.arg());
    let mask = amplitude.mapv(|a| u8::from(!a.is_nan()));
    ComplexDecomposition {
        amplitude,
        phase,
        mask,
    }
}
