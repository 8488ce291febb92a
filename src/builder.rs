// Pattern 2: Builder
// A consuming builder: every setter takes `self` and returns `self`, and
// `build()` moves the finished configuration out, so a builder is never
// reused after it has produced a `Computer`.

use std::fmt;

use crate::catalog::ComputerPreset;

const UNSPECIFIED: &str = "unspecified";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    cpu: String,
    ram: String,
    storage: String,
    gpu: String,
    bluetooth: bool,
    wifi: bool,
}

impl Computer {
    pub fn builder() -> ComputerBuilder {
        ComputerBuilder::new()
    }

    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    pub fn ram(&self) -> &str {
        &self.ram
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    /// Empty when the machine relies on integrated graphics.
    pub fn gpu(&self) -> &str {
        &self.gpu
    }

    pub fn has_bluetooth(&self) -> bool {
        self.bluetooth
    }

    pub fn has_wifi(&self) -> bool {
        self.wifi
    }

    pub fn display(&self) {
        println!("{self}");
    }
}

fn or_unspecified<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computer configuration:")?;
        writeln!(f, "CPU: {}", or_unspecified(&self.cpu, UNSPECIFIED))?;
        writeln!(f, "RAM: {}", or_unspecified(&self.ram, UNSPECIFIED))?;
        writeln!(f, "Storage: {}", or_unspecified(&self.storage, UNSPECIFIED))?;
        writeln!(f, "GPU: {}", or_unspecified(&self.gpu, "unspecified/integrated"))?;
        writeln!(f, "Bluetooth: {}", yes_no(self.bluetooth))?;
        write!(f, "WiFi: {}", yes_no(self.wifi))
    }
}

#[derive(Debug, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a catalog preset; fields the preset leaves out keep their
    /// defaults and can still be set afterwards.
    pub fn from_preset(preset: &ComputerPreset) -> Self {
        let mut builder = Self::new();
        if let Some(cpu) = &preset.cpu {
            builder = builder.cpu(cpu.as_str());
        }
        if let Some(ram) = &preset.ram {
            builder = builder.ram(ram.as_str());
        }
        if let Some(storage) = &preset.storage {
            builder = builder.storage(storage.as_str());
        }
        if let Some(gpu) = &preset.gpu {
            builder = builder.gpu(gpu.as_str());
        }
        if let Some(bluetooth) = preset.bluetooth {
            builder = builder.bluetooth(bluetooth);
        }
        if let Some(wifi) = preset.wifi {
            builder = builder.wifi(wifi);
        }
        builder
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = cpu.into();
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.computer.ram = ram.into();
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.computer.storage = storage.into();
        self
    }

    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.computer.gpu = gpu.into();
        self
    }

    pub fn bluetooth(mut self, enabled: bool) -> Self {
        self.computer.bluetooth = enabled;
        self
    }

    pub fn wifi(mut self, enabled: bool) -> Self {
        self.computer.wifi = enabled;
        self
    }

    pub fn build(self) -> Computer {
        self.computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_builder_defaults() {
        let computer = ComputerBuilder::new().build();
        assert_eq!(computer, Computer::default());
        assert_eq!(computer.cpu(), "");
        assert!(!computer.has_bluetooth());
        assert!(!computer.has_wifi());

        let rendered = computer.to_string();
        assert!(rendered.contains("CPU: unspecified"));
        assert!(rendered.contains("RAM: unspecified"));
        assert!(rendered.contains("Storage: unspecified"));
        assert!(rendered.contains("GPU: unspecified/integrated"));
        assert!(rendered.contains("Bluetooth: no"));
        assert!(rendered.contains("WiFi: no"));
    }

    #[test]
    fn test_builder_all_fields() {
        let computer = Computer::builder()
            .cpu("AMD Ryzen 9 7950X")
            .ram("64GB DDR5")
            .storage("4TB NVMe SSD")
            .gpu("NVIDIA RTX 4090")
            .bluetooth(true)
            .wifi(true)
            .build();

        assert_eq!(computer.cpu(), "AMD Ryzen 9 7950X");
        assert_eq!(computer.ram(), "64GB DDR5");
        assert_eq!(computer.storage(), "4TB NVMe SSD");
        assert_eq!(computer.gpu(), "NVIDIA RTX 4090");
        assert!(computer.has_bluetooth());
        assert!(computer.has_wifi());
        assert!(computer.to_string().contains("WiFi: yes"));
    }

    #[test]
    fn test_later_setter_wins() {
        let computer = Computer::builder().ram("8GB").ram("16GB").build();
        assert_eq!(computer.ram(), "16GB");
    }

    #[test]
    fn test_partial_build_renders_integrated_gpu() {
        let computer = Computer::builder()
            .cpu("Intel Core i3-12100")
            .bluetooth(true)
            .build();
        let rendered = computer.to_string();
        assert!(rendered.contains("CPU: Intel Core i3-12100"));
        assert!(rendered.contains("GPU: unspecified/integrated"));
        assert!(rendered.contains("Bluetooth: yes"));
    }

    #[test]
    fn test_from_preset() {
        let catalog = Catalog::embedded().unwrap();
        let office = ComputerBuilder::from_preset(catalog.computer("office").unwrap()).build();
        assert_eq!(office.cpu(), "Intel Core i3-12100");
        assert_eq!(office.gpu(), "");
        assert!(office.has_bluetooth());
        assert!(!office.has_wifi());

        let upgraded = ComputerBuilder::from_preset(catalog.computer("office").unwrap())
            .wifi(true)
            .build();
        assert!(upgraded.has_wifi());
    }
}
