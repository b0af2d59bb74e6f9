//! Host capability detection used to pick an NTT backend

use std::sync::OnceLock;

use tracing::debug;

/// Instruction-set family of the running host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpuArchitecture {
    Unknown,
    X86_64,
    Arm64,
    Riscv64,
    Ppc64,
}

/// Widest vector extension available to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimdSupport {
    #[default]
    None,
    Avx2,
    Avx512,
    Neon,
    Rvv,
    Vsx,
}

impl SimdSupport {
    /// Every tag, in declaration order
    pub const ALL: [SimdSupport; 6] = [
        SimdSupport::None,
        SimdSupport::Avx2,
        SimdSupport::Avx512,
        SimdSupport::Neon,
        SimdSupport::Rvv,
        SimdSupport::Vsx,
    ];

    /// 32-bit lanes per vector register for this extension.
    pub const fn lanes(self) -> usize {
        match self {
            SimdSupport::None => 1,
            SimdSupport::Neon | SimdSupport::Vsx => 4,
            SimdSupport::Avx2 | SimdSupport::Rvv => 8,
            SimdSupport::Avx512 => 16,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SimdSupport::None => "none",
            SimdSupport::Avx2 => "avx2",
            SimdSupport::Avx512 => "avx512",
            SimdSupport::Neon => "neon",
            SimdSupport::Rvv => "rvv",
            SimdSupport::Vsx => "vsx",
        }
    }
}

/// Result of one detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CpuCapabilities {
    pub architecture: CpuArchitecture,
    pub simd: SimdSupport,
}

/// Source of the capability tag consumed by the engine factory.
pub trait CapabilityDetector {
    fn detect(&self) -> CpuCapabilities;
}

/// Detects the running host once per process and caches the answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostDetector;

impl CapabilityDetector for HostDetector {
    fn detect(&self) -> CpuCapabilities {
        static CACHE: OnceLock<CpuCapabilities> = OnceLock::new();
        *CACHE.get_or_init(|| {
            let caps = probe();
            debug!(
                architecture = ?caps.architecture,
                simd = caps.simd.name(),
                "detected host capabilities"
            );
            caps
        })
    }
}

/// Always reports the same capabilities; for tests and explicit overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDetector(pub CpuCapabilities);

impl FixedDetector {
    /// Reports `simd` on an unknown architecture
    pub fn simd(simd: SimdSupport) -> Self {
        Self(CpuCapabilities {
            architecture: CpuArchitecture::Unknown,
            simd,
        })
    }
}

impl CapabilityDetector for FixedDetector {
    fn detect(&self) -> CpuCapabilities {
        self.0
    }
}

#[cfg(target_arch = "x86_64")]
fn probe() -> CpuCapabilities {
    let simd = if std::arch::is_x86_feature_detected!("avx512f") {
        SimdSupport::Avx512
    } else if std::arch::is_x86_feature_detected!("avx2") {
        SimdSupport::Avx2
    } else {
        SimdSupport::None
    };
    CpuCapabilities {
        architecture: CpuArchitecture::X86_64,
        simd,
    }
}

#[cfg(target_arch = "aarch64")]
fn probe() -> CpuCapabilities {
    let simd = if std::arch::is_aarch64_feature_detected!("neon") {
        SimdSupport::Neon
    } else {
        SimdSupport::None
    };
    CpuCapabilities {
        architecture: CpuArchitecture::Arm64,
        simd,
    }
}

#[cfg(target_arch = "riscv64")]
fn probe() -> CpuCapabilities {
    // Runtime probing of the V extension is not stable; use the build target.
    let simd = if cfg!(target_feature = "v") {
        SimdSupport::Rvv
    } else {
        SimdSupport::None
    };
    CpuCapabilities {
        architecture: CpuArchitecture::Riscv64,
        simd,
    }
}

#[cfg(target_arch = "powerpc64")]
fn probe() -> CpuCapabilities {
    let simd = if cfg!(target_feature = "vsx") {
        SimdSupport::Vsx
    } else {
        SimdSupport::None
    };
    CpuCapabilities {
        architecture: CpuArchitecture::Ppc64,
        simd,
    }
}

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv64",
    target_arch = "powerpc64"
)))]
fn probe() -> CpuCapabilities {
    CpuCapabilities {
        architecture: CpuArchitecture::Unknown,
        simd: SimdSupport::None,
    }
}
