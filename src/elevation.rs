use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("Windows API error: {0}")]
    WindowsApi(String),
    #[error("elevation check is only supported on Windows")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, ElevationError>;

/// Reports whether the process token carries administrator rights.
///
/// Network configuration through `netsh` requires elevation, so the caller
/// refuses to start the menu when this returns `false`.
#[cfg(target_os = "windows")]
pub fn is_elevated() -> Result<bool> {
    use std::ffi::c_void;
    use std::mem::size_of;
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::Security::{
        GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
    };
    use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    unsafe {
        let mut token = HANDLE::default();
        OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token)
            .map_err(|e| ElevationError::WindowsApi(format!("OpenProcessToken failed: {e}")))?;

        let mut elevation = TOKEN_ELEVATION::default();
        let mut return_size = 0u32;
        let result = GetTokenInformation(
            token,
            TokenElevation,
            Some(&mut elevation as *mut _ as *mut c_void),
            size_of::<TOKEN_ELEVATION>() as u32,
            &mut return_size,
        );
        let _ = CloseHandle(token);

        result
            .map_err(|e| ElevationError::WindowsApi(format!("GetTokenInformation failed: {e}")))?;

        Ok(elevation.TokenIsElevated != 0)
    }
}

#[cfg(not(target_os = "windows"))]
pub fn is_elevated() -> Result<bool> {
    Err(ElevationError::Unsupported)
}
